//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use iced::widget::{image, scrollable};
use wallboard_api::{PostPage, SearchResults};
use wallboard_core::{PostKey, Session};
use wallboard_platform::{DisplayTarget, WallpaperTarget};

use crate::model::{AppSettings, FetchTicket};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup / settings
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings written back to disk.
    SettingsSaved(Result<(), String>),
    /// Toggle between light and dark theme.
    ToggleTheme,

    // Browsing
    /// A board was picked in the sidebar.
    BoardSelected(&'static str),
    /// Search input changed.
    SearchQueryChanged(String),
    /// Search submitted.
    SearchSubmitted,
    /// Reload the current board or search (F5).
    Refresh,
    /// The gallery scroll position changed.
    GalleryScrolled(scrollable::Viewport),
    /// One board page arrived, tagged with the fetch it answers.
    PageLoaded(FetchTicket, Result<PostPage, String>),
    /// Search results arrived, tagged with their browsing generation.
    SearchLoaded(u64, Result<SearchResults, String>),
    /// A gallery thumbnail finished fetching.
    ThumbnailLoaded(PostKey, Result<image::Handle, String>),

    // Detail view
    /// A tile was clicked.
    PostOpened(PostKey),
    /// The detail view was dismissed.
    DetailClosed,
    /// The detail preview image finished fetching.
    PreviewLoaded(PostKey, Result<image::Handle, String>),
    /// Display enumeration finished for the given post's detail view.
    DisplaysLoaded(PostKey, Result<Vec<DisplayTarget>, String>),
    /// A wallpaper destination was picked.
    TargetSelected(WallpaperTarget),
    /// The apply button was pressed.
    ApplyPressed,
    /// The download-then-set pipeline finished.
    WallpaperApplied(Result<(), String>),
    /// The download-in-browser button was pressed.
    DownloadPressed,
    /// The browser-open call finished.
    DownloadOpened(Result<(), String>),

    // Account
    /// Login username changed.
    UsernameChanged(String),
    /// Login password changed.
    PasswordChanged(String),
    /// Login submitted.
    LoginSubmitted,
    /// Login finished.
    LoggedIn(Result<Session, String>),
    /// Logout pressed; local state resets immediately.
    LogoutPressed,
    /// The best-effort server-side invalidation finished.
    LogoutFinished,
}
