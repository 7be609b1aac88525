//! Temp-file downloader with single-hop redirect handling.

use std::path::{Path, PathBuf};

use reqwest::header::LOCATION;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::error::{PlatformError, Result};

/// Downloads assets into a spool directory, one file per request.
///
/// The board's download endpoint answers with a redirect to the real
/// asset, so automatic redirects are disabled and exactly one hop is
/// followed explicitly. Deeper chains are refused rather than risking an
/// HTML error page saved as an image.
#[derive(Debug, Clone)]
pub struct TempDownloader {
    http: reqwest::Client,
    dir: PathBuf,
}

impl TempDownloader {
    /// Creates a downloader spooling into the OS temp directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_dir(std::env::temp_dir())
    }

    /// Creates a downloader spooling into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, dir })
    }

    /// Fetches `url` into `<spool dir>/<file_name>` and returns the path.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Download`] for non-success statuses and
    /// redirect chains deeper than one hop; any partially written file is
    /// removed before the error surfaces.
    pub async fn download(&self, url: &str, file_name: &str) -> Result<PathBuf> {
        let response = self.http.get(url).send().await?;

        let response = if response.status().is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| {
                    PlatformError::Download("redirect response carried no location".into())
                })?;
            let next = resolve_location(url, location)?;
            debug!(%next, "following download redirect");

            let followed = self.http.get(next).send().await?;
            if followed.status().is_redirection() {
                return Err(PlatformError::Download(
                    "server redirected more than once; giving up".into(),
                ));
            }
            followed
        } else {
            response
        };

        if !response.status().is_success() {
            return Err(PlatformError::Download(format!(
                "server responded with {}",
                response.status()
            )));
        }

        let path = self.dir.join(sanitize_file_name(file_name));
        if let Err(error) = write_body(&path, response).await {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(error);
        }
        Ok(path)
    }
}

/// Streams the response body to `path`.
async fn write_body(path: &Path, mut response: reqwest::Response) -> Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}

/// Resolves a `Location` header value against the request URL.
fn resolve_location(request_url: &str, location: &str) -> Result<Url> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(Url::parse(location)?);
    }
    Ok(Url::parse(request_url)?.join(location)?)
}

/// Reduces a server-suggested filename to a safe basename.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        "download.bin".to_string()
    } else {
        base.to_string()
    }
}
