//! Header bar: branding, search, account controls, theme toggle.

use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Length};

use wallboard_core::Session;

use crate::message::Message;
use crate::model::LoginForm;
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::widgets::{
    danger_button_style, header_style, primary_button_style, secondary_button_style,
    text_input_style,
};

/// Renders the application header.
pub fn view_header(
    search_query: &str,
    session: &Session,
    login: &LoginForm,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let title = text("Wallboard")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let search = text_input("Search wallpapers...", search_query)
        .width(Length::Fixed(240.0))
        .padding([8, 14])
        .style(text_input_style)
        .on_input(Message::SearchQueryChanged)
        .on_submit(Message::SearchSubmitted);

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{1F319}", // moon: switch to dark
        ThemeMode::Dark => "\u{2600}",   // sun: switch to light
    };
    let theme_toggle = button(text(theme_icon).size(14))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    let spacer = iced::widget::Space::new().width(Length::Fill);

    let account: Element<'static, Message> = if session.is_logged_in {
        let who = text(format!(
            "{} \u{00B7} level {}",
            session.display_name, session.level
        ))
        .size(13)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

        let sign_out = button(text("Sign out").size(13))
            .padding([8, 14])
            .style(danger_button_style)
            .on_press(Message::LogoutPressed);

        row![who, sign_out]
            .spacing(10)
            .align_y(iced::Alignment::Center)
            .into()
    } else {
        let username = text_input("Username", &login.username)
            .width(Length::Fixed(130.0))
            .padding([8, 12])
            .style(text_input_style)
            .on_input(Message::UsernameChanged);

        let password = text_input("Password", &login.password)
            .secure(true)
            .width(Length::Fixed(130.0))
            .padding([8, 12])
            .style(text_input_style)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::LoginSubmitted);

        let sign_in = button(text(if login.is_pending { "Signing in..." } else { "Sign in" }).size(13))
            .padding([8, 14])
            .style(primary_button_style)
            .on_press_maybe((!login.is_pending).then_some(Message::LoginSubmitted));

        let mut account_row = row![username, password, sign_in]
            .spacing(8)
            .align_y(iced::Alignment::Center);

        if let Some(error) = &login.error {
            account_row = account_row.push(text(error.clone()).size(12).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.danger),
                }
            }));
        }

        account_row.into()
    };

    container(
        row![title, search, spacer, account, theme_toggle]
            .spacing(16)
            .padding([12, 20])
            .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}
