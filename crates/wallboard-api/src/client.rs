//! HTTP client for the board endpoints.

use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, Result};
use crate::types::{ListEnvelope, LoginEnvelope, LoginOutcome, PostPage, PostRecord, SearchResults};
use crate::urls::join_url;

/// Page size used when the caller passes a non-positive value.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Client for one board deployment, addressed by a single base URL.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    base: Url,
}

impl BoardClient {
    /// Creates a client for the deployment at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// The configured base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves a server-relative asset path (thumbnail, view URL) to an
    /// absolute URL.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    /// Fetches one page of a board listing.
    ///
    /// Non-positive `page`/`page_size` are corrected to `1` and
    /// [`DEFAULT_PAGE_SIZE`] before the request goes out; invalid paging is
    /// never an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Remote`] for an unknown board or a non-success
    /// status, [`ApiError::Http`] for transport failures.
    pub async fn list_posts(&self, board_id: &str, page: u32, page_size: u32) -> Result<PostPage> {
        let (page, page_size) = normalize_paging(page, page_size);
        debug!(board_id, page, page_size, "listing posts");

        let response = self
            .http
            .get(join_url(&self.base, "api/board_list.php"))
            .query(&[
                ("bo_table", board_id.to_string()),
                ("page", page.to_string()),
                ("limit", page_size.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Remote(format!(
                "board listing failed with status {}",
                response.status()
            )));
        }

        let envelope: ListEnvelope = response.json().await?;
        if let Some(error) = envelope.error {
            return Err(ApiError::Remote(error));
        }

        Ok(PostPage {
            posts: envelope.posts,
            total_count: envelope.total,
            page,
            page_size,
        })
    }

    /// Searches every searchable board for `term` and returns the merged
    /// results sorted by date descending.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without touching the network when
    /// `term` is shorter than two characters; otherwise as
    /// [`Self::list_posts`].
    pub async fn search_posts(&self, term: &str) -> Result<SearchResults> {
        let term = term.trim();
        if term.chars().count() < 2 {
            return Err(ApiError::Validation(
                "Search term must be at least 2 characters long.".into(),
            ));
        }
        debug!(term, "searching posts");

        let response = self
            .http
            .get(join_url(&self.base, "api/search.php"))
            .query(&[("stx", term)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Remote(format!(
                "search failed with status {}",
                response.status()
            )));
        }

        let envelope: ListEnvelope = response.json().await?;
        if let Some(error) = envelope.error {
            return Err(ApiError::Remote(error));
        }

        let mut posts = envelope.posts;
        sort_by_date_descending(&mut posts);

        Ok(SearchResults {
            posts,
            total_count: envelope.total,
        })
    }

    /// Logs in with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] for empty credentials (before any network
    /// call) and for server-rejected credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(ApiError::Auth(
                "Username or password cannot be empty.".into(),
            ));
        }

        let response = self
            .http
            .post(join_url(&self.base, "api/login.php"))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Remote(format!(
                "login failed with status {}",
                response.status()
            )));
        }

        let envelope: LoginEnvelope = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Auth(envelope.message));
        }

        let token = envelope
            .token
            .ok_or_else(|| ApiError::Remote("login response carried no session token".into()))?;
        let member = envelope.member.unwrap_or_default();
        let name = if member.nick.is_empty() {
            member.name
        } else {
            member.nick
        };

        Ok(LoginOutcome {
            token,
            level: u8::try_from(envelope.level).unwrap_or(u8::MAX),
            member_id: member.id,
            name,
        })
    }

    /// Invalidates the server-side session. Best-effort: failures are
    /// logged and swallowed, so callers can always clear local state.
    pub async fn logout(&self, token: &str) {
        let result = self
            .http
            .get(join_url(&self.base, "api/logout.php"))
            .query(&[("token", token)])
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                warn!(status = %response.status(), "logout request rejected");
            }
            Err(error) => warn!(%error, "logout request failed"),
            Ok(_) => {}
        }
    }

    /// Builds the redirecting file-download URL for one attachment.
    ///
    /// The endpoint checks entitlement server-side and either redirects to
    /// the asset or answers 400/403/404. A session token is attached when
    /// available so the check sees the logged-in member.
    #[must_use]
    pub fn download_url(
        &self,
        board_id: &str,
        post_id: &str,
        attachment_index: usize,
        token: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}?bo_table={board_id}&wr_id={post_id}&no={attachment_index}",
            join_url(&self.base, "api/file_download.php")
        );
        if let Some(token) = token {
            url.push_str("&token=");
            url.push_str(token);
        }
        url
    }
}

/// Corrects non-positive paging input to the defaults.
const fn normalize_paging(page: u32, page_size: u32) -> (u32, u32) {
    let page = if page < 1 { 1 } else { page };
    let page_size = if page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    (page, page_size)
}

/// Stable sort on the server date string, newest first. Stability keeps
/// per-board discovery order for equal dates.
fn sort_by_date_descending(posts: &mut [PostRecord]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}
