//! Board list sidebar.

use iced::widget::{button, column, container, text};
use iced::{Element, Length};

use wallboard_core::BOARDS;

use crate::message::Message;
use crate::model::BrowseMode;
use crate::style::widgets::{
    board_button_selected_style, board_button_style, palette, sidebar_style,
};

/// Renders the board categories; the active board is highlighted.
pub fn view_sidebar(mode: &BrowseMode) -> Element<'static, Message> {
    let mut boards = column![].spacing(4).padding(12);

    for board in BOARDS {
        let selected = *mode == BrowseMode::Board(board.id);
        let style = if selected {
            board_button_selected_style
        } else {
            board_button_style
        };
        boards = boards.push(
            button(text(board.title).size(14))
                .width(Length::Fill)
                .padding([8, 12])
                .style(style)
                .on_press(Message::BoardSelected(board.id)),
        );
    }

    let caption = text("Boards").size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    });

    container(column![container(caption).padding([12, 16]), boards])
        .width(Length::Fixed(180.0))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}
