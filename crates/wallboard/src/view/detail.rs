//! Detail view: preview, metadata, display targets, apply and download.

use iced::widget::{Column, button, column, container, image, row, scrollable, text};
use iced::{ContentFit, Element, Length};

use wallboard_core::{Post, format_short_date};
use wallboard_platform::{DisplayTarget, WallpaperTarget};

use crate::message::Message;
use crate::model::{DetailState, StatusLine, TargetsState, ThumbnailState};
use crate::style::widgets::{
    detail_panel_style, palette, placeholder_style, primary_button_style, scrollable_style,
    secondary_button_style, status_error_style, status_ok_style, target_button_selected_style,
    target_button_style,
};

/// Renders the detail view for the opened post.
pub fn view_detail(detail: &DetailState, post: &Post) -> Element<'static, Message> {
    let back = button(text("\u{2190} Back to gallery").size(13))
        .padding([8, 14])
        .style(secondary_button_style)
        .on_press(Message::DetailClosed);

    let title = text(post.title.clone())
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_primary),
            }
        });

    let preview: Element<'static, Message> = match &detail.preview {
        ThumbnailState::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(340.0))
            .content_fit(ContentFit::Contain)
            .into(),
        ThumbnailState::Loading if detail.preview_url.is_some() => preview_well("\u{23F3}"),
        _ => preview_well("No Preview"),
    };

    let info = column![
        info_row("Author", &post.author),
        info_row("Date", &format_short_date(&post.date)),
        info_row("Views", &post.views.to_string()),
        info_row("Files", &post.files.len().to_string()),
    ]
    .spacing(6);

    let mut attachments = column![].spacing(2);
    for file in &post.files {
        attachments = attachments.push(
            text(format!(
                "{} ({})",
                file.display_name,
                format_size(file.size_bytes)
            ))
            .size(12)
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            }),
        );
    }

    let targets = view_targets(detail);

    let apply_label = if detail.is_applying {
        "Applying..."
    } else {
        "Apply to Selected"
    };
    // Disabled for the whole download-then-set run; re-enabled by
    // finish_apply on every exit path.
    let apply = button(text(apply_label).size(14))
        .padding([10, 18])
        .style(primary_button_style)
        .on_press_maybe((!detail.is_applying).then_some(Message::ApplyPressed));

    let download = button(text("Download Original").size(14))
        .padding([10, 18])
        .style(secondary_button_style)
        .on_press(Message::DownloadPressed);

    let mut actions = column![row![apply, download].spacing(10)].spacing(10);
    if let Some(status) = &detail.status {
        actions = actions.push(view_status(status));
    }

    let side = column![info, attachments, targets, actions].spacing(18);

    let body = row![
        container(preview).width(Length::FillPortion(3)),
        container(side).width(Length::FillPortion(2)),
    ]
    .spacing(20);

    let panel = container(column![row![back].width(Length::Fill), title, body].spacing(16))
        .padding(20)
        .style(detail_panel_style);

    container(scrollable(panel).style(scrollable_style))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(18)
        .into()
}

/// Display-target picker.
fn view_targets(detail: &DetailState) -> Element<'static, Message> {
    let caption = text("Apply to").size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    });

    let mut rows = Column::new().spacing(4);
    match &detail.targets {
        TargetsState::Loading => {
            rows = rows.push(text("Detecting displays...").size(13).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }));
        }
        TargetsState::Failed(message) => {
            rows = rows.push(text(format!("Could not load display info: {message}")).size(12).style(
                |_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.danger),
                    }
                },
            ));
        }
        TargetsState::Ready(displays) => {
            for (index, display) in displays.iter().enumerate() {
                rows = rows.push(target_row(
                    &display_label(index, display),
                    WallpaperTarget::Display(display.id.clone()),
                    &detail.selected,
                ));
            }
        }
    }
    // The synthetic all-displays choice comes after the enumerated ones
    // and is available even when enumeration failed.
    rows = rows.push(target_row(
        "All Monitors",
        WallpaperTarget::All,
        &detail.selected,
    ));

    column![caption, rows].spacing(6).into()
}

fn target_row(
    label: &str,
    target: WallpaperTarget,
    selected: &WallpaperTarget,
) -> Element<'static, Message> {
    let style = if target == *selected {
        target_button_selected_style
    } else {
        target_button_style
    };
    button(text(label.to_string()).size(13))
        .width(Length::Fill)
        .padding([6, 10])
        .style(style)
        .on_press(Message::TargetSelected(target))
        .into()
}

fn display_label(index: usize, display: &DisplayTarget) -> String {
    let primary = if display.is_primary { " (Primary)" } else { "" };
    format!(
        "Monitor {} ({}x{}){primary}",
        index + 1,
        display.width_px,
        display.height_px
    )
}

fn view_status(status: &StatusLine) -> Element<'static, Message> {
    let style = if status.is_error {
        status_error_style
    } else {
        status_ok_style
    };
    let is_error = status.is_error;
    container(text(status.text.clone()).size(13).style(move |_theme| {
        let p = palette::current();
        text::Style {
            color: Some(if is_error { p.danger } else { p.success }),
        }
    }))
    .width(Length::Fill)
    .padding([8, 12])
    .style(style)
    .into()
}

fn info_row(label: &str, value: &str) -> Element<'static, Message> {
    let label_text = text(format!("{label}:"))
        .size(13)
        .font(iced::Font {
            weight: iced::font::Weight::Medium,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        });

    let value_text = text(value.to_string()).size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_primary),
        }
    });

    row![container(label_text).width(Length::Fixed(60.0)), value_text]
        .spacing(8)
        .into()
}

fn preview_well(label: &str) -> Element<'static, Message> {
    container(text(label.to_string()).size(14).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    }))
    .width(Length::Fill)
    .height(Length::Fixed(340.0))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(placeholder_style)
    .into()
}

/// Human-readable byte size for the attachment list.
fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.0} KB", bytes_f / 1024.0)
    } else {
        format!("{:.1} MB", bytes_f / (1024.0 * 1024.0))
    }
}
