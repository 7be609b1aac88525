//! Error types for platform operations.

use thiserror::Error;

/// Errors from the platform bridge. Each bridge operation fails
/// independently; none of these are fatal to the application.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// A download could not be completed (bad status, unsupported
    /// redirect chain, truncated transfer).
    #[error("download failed: {0}")]
    Download(String),

    /// The OS wallpaper facility rejected the request.
    #[error("failed to set wallpaper: {0}")]
    Wallpaper(String),

    /// Display enumeration failed.
    #[error("could not read display information: {0}")]
    Displays(String),

    /// The default browser could not be opened.
    #[error("failed to open browser: {0}")]
    Browser(String),

    /// Filesystem failure while writing or cleaning up a temp file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A redirect target was not a usable URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, PlatformError>;
