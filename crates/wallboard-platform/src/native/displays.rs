//! Display enumeration per host platform.

use crate::bridge::DisplayTarget;
use crate::error::{PlatformError, Result};

/// Enumerates attached displays in OS order.
pub(crate) async fn enumerate() -> Result<Vec<DisplayTarget>> {
    query().await.map_err(PlatformError::Displays)
}

#[cfg(target_os = "linux")]
async fn query() -> std::result::Result<Vec<DisplayTarget>, String> {
    let listing = super::capture("xrandr", &["--listmonitors"]).await?;
    Ok(parse_monitor_listing(&listing))
}

/// Parses `xrandr --listmonitors` output, e.g.
///
/// ```text
/// Monitors: 2
///  0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
///  1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
/// ```
#[cfg(target_os = "linux")]
fn parse_monitor_listing(listing: &str) -> Vec<DisplayTarget> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            fields.next()?; // index column
            let flags = fields.next()?;
            let geometry = fields.next()?;
            let name = fields.next_back().unwrap_or(flags).to_string();

            let (width_px, height_px) = parse_geometry(geometry)?;
            Some(DisplayTarget {
                id: name,
                width_px,
                height_px,
                is_primary: flags.contains('*'),
            })
        })
        .collect()
}

/// Extracts pixel dimensions from a geometry token like
/// `1920/309x1080/174+0+0`.
#[cfg(target_os = "linux")]
fn parse_geometry(geometry: &str) -> Option<(u32, u32)> {
    let (width_part, rest) = geometry.split_once('x')?;
    let width = width_part.split('/').next()?.parse().ok()?;
    let height = rest
        .split(['/', '+'])
        .next()?
        .parse()
        .ok()?;
    Some((width, height))
}

#[cfg(target_os = "macos")]
async fn query() -> std::result::Result<Vec<DisplayTarget>, String> {
    let json = super::capture("system_profiler", &["SPDisplaysDataType", "-json"]).await?;
    parse_display_profile(&json)
}

/// Parses `system_profiler SPDisplaysDataType -json` output. Display ids
/// are 1-based desktop indexes, which is how the wallpaper scripting
/// interface addresses them.
#[cfg(target_os = "macos")]
fn parse_display_profile(json: &str) -> std::result::Result<Vec<DisplayTarget>, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|error| format!("unreadable profiler output: {error}"))?;

    let mut displays = Vec::new();
    let adapters = value["SPDisplaysDataType"].as_array().cloned().unwrap_or_default();
    for adapter in adapters {
        for screen in adapter["spdisplays_ndrvs"].as_array().cloned().unwrap_or_default() {
            let pixels = screen["_spdisplays_pixels"].as_str().unwrap_or_default();
            let Some((width_px, height_px)) = parse_pixel_pair(pixels) else {
                continue;
            };
            displays.push(DisplayTarget {
                id: (displays.len() + 1).to_string(),
                width_px,
                height_px,
                is_primary: screen["spdisplays_main"].as_str() == Some("spdisplays_yes"),
            });
        }
    }
    Ok(displays)
}

/// Parses a `"2880 x 1800"` style dimension string.
#[cfg(target_os = "macos")]
fn parse_pixel_pair(pixels: &str) -> Option<(u32, u32)> {
    let (width, height) = pixels.split_once('x')?;
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

#[cfg(target_os = "windows")]
async fn query() -> std::result::Result<Vec<DisplayTarget>, String> {
    const SCRIPT: &str = "Add-Type -AssemblyName System.Windows.Forms; \
        [System.Windows.Forms.Screen]::AllScreens | ForEach-Object { \
        [PSCustomObject]@{ id = $_.DeviceName; width = $_.Bounds.Width; \
        height = $_.Bounds.Height; primary = $_.Primary } } | ConvertTo-Json -AsArray";
    let json = super::capture("powershell", &["-NoProfile", "-Command", SCRIPT]).await?;
    parse_screen_list(&json)
}

/// Parses the JSON screen list produced by the PowerShell query above.
#[cfg(target_os = "windows")]
fn parse_screen_list(json: &str) -> std::result::Result<Vec<DisplayTarget>, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|error| format!("unreadable screen list: {error}"))?;

    let screens = value.as_array().cloned().unwrap_or_default();
    Ok(screens
        .iter()
        .filter_map(|screen| {
            Some(DisplayTarget {
                id: screen["id"].as_str()?.to_string(),
                width_px: u32::try_from(screen["width"].as_u64()?).ok()?,
                height_px: u32::try_from(screen["height"].as_u64()?).ok()?,
                is_primary: screen["primary"].as_bool().unwrap_or(false),
            })
        })
        .collect())
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monitor_listing() {
        let listing = "Monitors: 2\n \
            0: +*eDP-1 1920/309x1080/174+0+0  eDP-1\n \
            1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1\n";
        let displays = parse_monitor_listing(listing);

        assert_eq!(displays.len(), 2);
        assert_eq!(displays[0].id, "eDP-1");
        assert_eq!(displays[0].width_px, 1920);
        assert_eq!(displays[0].height_px, 1080);
        assert!(displays[0].is_primary);
        assert_eq!(displays[1].id, "HDMI-1");
        assert!(!displays[1].is_primary);
    }

    #[test]
    fn test_parse_monitor_listing_empty() {
        assert!(parse_monitor_listing("Monitors: 0\n").is_empty());
    }

    #[test]
    fn test_parse_geometry() {
        assert_eq!(parse_geometry("1920/309x1080/174+0+0"), Some((1920, 1080)));
        assert_eq!(parse_geometry("garbage"), None);
    }
}


#[cfg(all(test, target_os = "windows"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_screen_list() {
        let json = r#"[
            {"id": "\\\\.\\DISPLAY1", "width": 2560, "height": 1440, "primary": true},
            {"id": "\\\\.\\DISPLAY2", "width": 1920, "height": 1080, "primary": false}
        ]"#;
        let displays = parse_screen_list(json).unwrap();

        assert_eq!(displays.len(), 2);
        assert!(displays[0].is_primary);
        assert_eq!(displays[1].width_px, 1920);
    }
}
