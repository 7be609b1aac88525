//! View-state models for the application.

mod account;
mod detail;
mod gallery;
mod settings;
mod thumbnail;

pub use account::LoginForm;
pub use detail::{DetailState, StatusLine, TargetsState};
pub use gallery::{BrowseMode, FetchTicket, GalleryPhase, GalleryState, near_bottom};
pub use settings::AppSettings;
pub use thumbnail::ThumbnailState;
