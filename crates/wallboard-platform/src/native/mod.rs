//! Bridge implementation talking to the host desktop.

mod displays;
mod wallpaper;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::bridge::{DisplayTarget, PlatformBridge, WallpaperTarget};
use crate::download::TempDownloader;
use crate::error::{PlatformError, Result};

/// The real platform bridge: shells out to the host's display and
/// wallpaper tooling, downloads into the OS temp directory, and opens
/// URLs with the default browser.
#[derive(Debug)]
pub struct NativeBridge {
    downloader: TempDownloader,
}

impl NativeBridge {
    /// Creates the bridge with a temp-directory downloader.
    ///
    /// # Errors
    ///
    /// Returns an error if the download client cannot be constructed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            downloader: TempDownloader::new()?,
        })
    }
}

#[async_trait]
impl PlatformBridge for NativeBridge {
    async fn get_displays(&self) -> Result<Vec<DisplayTarget>> {
        displays::enumerate().await
    }

    async fn set_wallpaper(&self, image_path: &Path, target: &WallpaperTarget) -> Result<()> {
        info!(path = %image_path.display(), ?target, "setting wallpaper");
        wallpaper::set(image_path, target).await
    }

    async fn download_to_temp(&self, url: &str, file_name: &str) -> Result<PathBuf> {
        self.downloader.download(url, file_name).await
    }

    async fn open_in_browser(&self, url: &str) -> Result<()> {
        let url = url.to_string();
        tokio::task::spawn_blocking(move || opener::open(&url))
            .await
            .map_err(|error| PlatformError::Browser(error.to_string()))?
            .map_err(|error| PlatformError::Browser(error.to_string()))
    }
}

/// Runs a command and captures stdout, folding every failure mode into a
/// message the caller wraps with its own error variant.
pub(crate) async fn capture(program: &str, args: &[&str]) -> std::result::Result<String, String> {
    match tokio::process::Command::new(program)
        .args(args)
        .output()
        .await
    {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => Err(format!(
            "{program} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )),
        Err(error) => Err(format!("failed to run {program}: {error}")),
    }
}
