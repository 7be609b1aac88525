//! Error types for the board API client.

use thiserror::Error;

/// Errors that can occur when talking to the board API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local input was rejected before any network call.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Credentials were rejected, locally or by the server.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The server answered with an error body or a non-success status.
    #[error("board server error: {0}")]
    Remote(String),

    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, ApiError>;
