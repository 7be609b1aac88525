//! # wallboard-api
//!
//! Typed client for the remote wallpaper board's JSON API: paginated board
//! listings, cross-board search, login/logout, and download-URL
//! construction.
//!
//! The backend is a PHP bulletin board whose JSON output is loosely typed
//! (ids and counters may arrive as numbers or strings); all normalization
//! happens here at the boundary so the rest of the application only sees
//! well-formed values.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod types;
mod urls;

pub use client::{BoardClient, DEFAULT_PAGE_SIZE};
pub use error::{ApiError, Result};
pub use types::{FileRecord, LoginOutcome, PostPage, PostRecord, SearchResults};
pub use urls::join_url;
