//! Thumbnail loading state for gallery tiles and the detail preview.

use iced::widget::image;

/// Loading state of one fetched image.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Fetch in progress.
    Loading,
    /// Bytes arrived and decoded into a handle.
    Ready(image::Handle),
    /// Fetch failed; the tile shows its placeholder.
    Failed(String),
}
