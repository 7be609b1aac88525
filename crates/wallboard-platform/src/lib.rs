//! # wallboard-platform
//!
//! The only part of wallboard with OS privileges: display enumeration,
//! wallpaper setting, temp-file downloads, and opening URLs in the default
//! browser.
//!
//! Everything is exposed behind the [`PlatformBridge`] trait so the
//! application core can be exercised against a scripted double; the
//! [`NativeBridge`] implementation talks to the host desktop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod bridge;
mod download;
mod error;
mod native;

pub use bridge::{DisplayTarget, PlatformBridge, WallpaperTarget};
pub use download::TempDownloader;
pub use error::{PlatformError, Result};
pub use native::NativeBridge;
