//! Wallpaper setting per host platform.

use std::path::Path;

use crate::bridge::WallpaperTarget;
use crate::error::{PlatformError, Result};

/// Applies `image_path` as the wallpaper of the chosen target.
pub(crate) async fn set(image_path: &Path, target: &WallpaperTarget) -> Result<()> {
    apply(image_path, target).await.map_err(PlatformError::Wallpaper)
}

#[cfg(target_os = "linux")]
async fn apply(image_path: &Path, _target: &WallpaperTarget) -> std::result::Result<(), String> {
    // Linux desktops expose a single wallpaper surface per session, so a
    // specific display target spans the whole desktop here.
    let path = image_path
        .to_str()
        .ok_or_else(|| "image path is not valid UTF-8".to_string())?;
    let desktop = std::env::var("XDG_CURRENT_DESKTOP")
        .unwrap_or_default()
        .to_lowercase();

    if desktop.contains("gnome") || desktop.contains("unity") || desktop.contains("cinnamon") {
        let uri = format!("file://{path}");
        for key in ["picture-uri", "picture-uri-dark"] {
            super::capture(
                "gsettings",
                &["set", "org.gnome.desktop.background", key, &uri],
            )
            .await?;
        }
        Ok(())
    } else if desktop.contains("kde") {
        super::capture("plasma-apply-wallpaperimage", &[path]).await.map(drop)
    } else {
        super::capture("feh", &["--bg-fill", path]).await.map(drop)
    }
}

#[cfg(target_os = "macos")]
async fn apply(image_path: &Path, target: &WallpaperTarget) -> std::result::Result<(), String> {
    let path = image_path
        .to_str()
        .ok_or_else(|| "image path is not valid UTF-8".to_string())?;
    let script = match target {
        WallpaperTarget::All => format!(
            r#"tell application "System Events" to set picture of every desktop to "{path}""#
        ),
        // Display ids on macOS are 1-based desktop indexes.
        WallpaperTarget::Display(id) => format!(
            r#"tell application "System Events" to set picture of desktop {id} to "{path}""#
        ),
    };
    super::capture("osascript", &["-e", &script]).await.map(drop)
}

#[cfg(target_os = "windows")]
async fn apply(image_path: &Path, _target: &WallpaperTarget) -> std::result::Result<(), String> {
    // SystemParametersInfo has no per-monitor addressing; the image spans
    // every display.
    let path = image_path
        .to_str()
        .ok_or_else(|| "image path is not valid UTF-8".to_string())?;
    let script = format!(
        "Add-Type -TypeDefinition 'using System.Runtime.InteropServices; \
         public class Wall {{ [DllImport(\"user32.dll\")] \
         public static extern int SystemParametersInfo(int uAction, int uParam, string lpvParam, int fuWinIni); }}'; \
         [Wall]::SystemParametersInfo(20, 0, '{path}', 3)"
    );
    super::capture("powershell", &["-NoProfile", "-Command", &script])
        .await
        .map(drop)
}
