//! Error types for the core library.

use thiserror::Error;

use crate::session::PREMIUM_LEVEL;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Board API call failed.
    #[error(transparent)]
    Api(#[from] wallboard_api::ApiError),

    /// Platform bridge operation failed.
    #[error(transparent)]
    Platform(#[from] wallboard_platform::PlatformError),

    /// The current session's level does not unlock this board.
    #[error("This wallpaper requires a premium membership (level {PREMIUM_LEVEL} or higher).")]
    NotEntitled,

    /// The post has attachments, but none with an image or video
    /// extension.
    #[error("No downloadable image file found for this post.")]
    NoMediaAttachment,

    /// The post has no attachments at all.
    #[error("No downloadable file found.")]
    NoAttachments,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
