//! Gallery grid with infinite scroll.

use std::collections::HashMap;

use iced::widget::{Column, Row, button, column, container, image, scrollable, text};
use iced::{ContentFit, Element, Length};

use wallboard_core::{Post, PostKey, PostStore};

use crate::message::Message;
use crate::model::{GalleryPhase, GalleryState, ThumbnailState};
use crate::style::widgets::{
    error_banner_style, gallery_style, palette, placeholder_style, scrollable_style,
    tile_button_style, tile_style,
};

/// Tiles per grid row.
const COLUMNS: usize = 3;

/// Tile image height in logical pixels.
const TILE_IMAGE_HEIGHT: f32 = 160.0;

/// Renders the gallery area for the current browse state.
pub fn view_gallery(
    gallery: &GalleryState,
    store: &PostStore,
    thumbnails: &HashMap<PostKey, ThumbnailState>,
) -> Element<'static, Message> {
    // Fresh loads show a full-pane message; pagination failures keep the
    // grid and add a banner above it.
    if store.is_empty() {
        return match &gallery.phase {
            GalleryPhase::Loading => centered_note("Loading wallpapers..."),
            GalleryPhase::Error(detail) => {
                centered_note(&format!("Error loading wallpapers.\n\nDetails: {detail}"))
            }
            GalleryPhase::Idle | GalleryPhase::Loaded => {
                centered_note("No wallpapers found in this category.")
            }
        };
    }

    let mut content = column![].spacing(14).padding(18);

    if let GalleryPhase::Error(detail) = &gallery.phase {
        content = content.push(
            container(text(format!("Error loading wallpapers: {detail}")).size(13).style(
                |_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.danger),
                    }
                },
            ))
            .width(Length::Fill)
            .padding([8, 12])
            .style(error_banner_style),
        );
    }

    let posts: Vec<&Post> = store.all().collect();
    for chunk in posts.chunks(COLUMNS) {
        let mut grid_row = Row::new().spacing(14);
        for post in chunk {
            grid_row = grid_row.push(view_tile(post, thumbnails.get(&post.key())));
        }
        // Pad the last row so tiles keep their width.
        for _ in chunk.len()..COLUMNS {
            grid_row = grid_row.push(iced::widget::Space::new().width(Length::Fill));
        }
        content = content.push(grid_row);
    }

    if gallery.phase == GalleryPhase::Loading {
        content = content.push(
            container(text("Loading more...").size(13).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            }))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(8),
        );
    }

    container(
        scrollable(content.width(Length::Fill))
            .height(Length::Fill)
            .style(scrollable_style)
            .on_scroll(Message::GalleryScrolled),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(gallery_style)
    .into()
}

/// One clickable wallpaper tile.
fn view_tile(post: &Post, thumbnail: Option<&ThumbnailState>) -> Element<'static, Message> {
    let art: Element<'static, Message> = match thumbnail {
        Some(ThumbnailState::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(TILE_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ThumbnailState::Loading) => placeholder_well("\u{23F3}"),
        _ => placeholder_well("No Preview"),
    };

    let title = text(post.title.clone()).size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_primary),
        }
    });

    let author = text(post.author.clone()).size(11).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    });

    let tile = container(
        Column::new()
            .push(art)
            .push(column![title, author].spacing(2).padding([8, 10])),
    )
    .width(Length::Fill)
    .style(tile_style);

    button(tile)
        .width(Length::Fill)
        .padding(0)
        .style(tile_button_style)
        .on_press(Message::PostOpened(post.key()))
        .into()
}

/// The "No Preview" well shown while a thumbnail loads or after it fails.
fn placeholder_well(label: &str) -> Element<'static, Message> {
    container(text(label.to_string()).size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    }))
    .width(Length::Fill)
    .height(Length::Fixed(TILE_IMAGE_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(placeholder_style)
    .into()
}

/// Full-pane centered message for loading/empty/error states.
fn centered_note(message: &str) -> Element<'static, Message> {
    container(text(message.to_string()).size(15).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(gallery_style)
    .into()
}
