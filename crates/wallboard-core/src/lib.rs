//! # wallboard-core
//!
//! Core client logic for the wallboard desktop app:
//! - Domain model (posts, attachments, the board catalog)
//! - The in-memory post store backing the gallery
//! - Session state and the premium entitlement gate
//! - Orchestration of the download-then-apply wallpaper pipeline
//!
//! Network access goes through [`wallboard_api`], OS access through the
//! [`wallboard_platform`] bridge trait; nothing in this crate touches
//! either directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod datefmt;
mod error;
mod post;
mod service;
mod session;
mod store;

pub use datefmt::format_short_date;
pub use error::{Error, Result};
pub use post::{Attachment, Board, BOARDS, DEFAULT_BOARD, Post, PostKey};
pub use service::{apply_wallpaper, open_download_page, preview_url};
pub use session::{GATED_BOARDS, PREMIUM_LEVEL, Session, login, logout};
pub use store::PostStore;
