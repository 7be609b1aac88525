//! The platform bridge trait and its target types.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;

/// One OS-reported monitor, snapshotted at enumeration time.
///
/// Monitor topology can change at any moment, so callers re-query rather
/// than caching these across detail-view openings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTarget {
    /// Platform-specific display identifier.
    pub id: String,
    /// Horizontal resolution in pixels.
    pub width_px: u32,
    /// Vertical resolution in pixels.
    pub height_px: u32,
    /// Whether the OS reports this as the primary display.
    pub is_primary: bool,
}

/// Where a wallpaper should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallpaperTarget {
    /// A single display, addressed by its [`DisplayTarget::id`].
    Display(String),
    /// Every display at once (the synthetic "All Monitors" choice).
    All,
}

/// OS capabilities the client needs, each asynchronous and independently
/// failable.
#[async_trait]
pub trait PlatformBridge: Send + Sync {
    /// Enumerates the currently attached displays, in OS order.
    async fn get_displays(&self) -> Result<Vec<DisplayTarget>>;

    /// Sets `image_path` as the wallpaper of the chosen target.
    async fn set_wallpaper(&self, image_path: &Path, target: &WallpaperTarget) -> Result<()>;

    /// Downloads `url` into the temp directory under `file_name` and
    /// returns the local path. Partial files are removed on failure.
    async fn download_to_temp(&self, url: &str, file_name: &str) -> Result<PathBuf>;

    /// Opens `url` in the default browser. Fire-and-forget from the
    /// caller's perspective; failures only surface as an error message.
    async fn open_in_browser(&self, url: &str) -> Result<()>;
}
