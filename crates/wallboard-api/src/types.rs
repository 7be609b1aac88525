//! Wire types for the board API endpoints.
//!
//! The backend serializes database rows more or less verbatim, so numeric
//! fields arrive as JSON numbers or as strings depending on the PHP
//! version and driver. The `lenient` helpers accept both and coerce
//! malformed values to a default instead of failing the whole response.

use serde::Deserialize;

/// One attachment on a post, as reported by the board.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileRecord {
    /// Original (source) filename; also the suggested download name.
    #[serde(default)]
    pub source: String,
    /// File size in bytes.
    #[serde(default, deserialize_with = "lenient::u64_or_default")]
    pub size: u64,
    /// User-entered file description, used as the display name.
    #[serde(default)]
    pub content: String,
    /// Server URL for viewing this attachment.
    #[serde(default)]
    pub view_url: String,
}

/// One post row from a list or search response.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    /// Server-assigned post id, unique within a board.
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    /// Board the post belongs to. Only the search endpoint echoes this;
    /// list responses leave it out and the caller supplies it.
    #[serde(default)]
    pub bo_table: Option<String>,
    /// Post title, already HTML-decoded by the server.
    #[serde(default)]
    pub title: String,
    /// Raw HTML body; opaque to this client.
    #[serde(default)]
    pub content: String,
    /// Thumbnail path resolved by the server; empty when none exists.
    #[serde(default)]
    pub thumbnail: String,
    /// Attachments in server order; the index addresses one in download
    /// requests.
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// Server datetime string; used as the sort key as-is.
    #[serde(default)]
    pub date: String,
    /// Author display name.
    #[serde(default)]
    pub author: String,
    /// View counter.
    #[serde(default, deserialize_with = "lenient::u64_or_default")]
    pub views: u64,
}

/// One page of a board listing.
#[derive(Debug, Clone)]
pub struct PostPage {
    /// Posts in server order.
    pub posts: Vec<PostRecord>,
    /// Total number of posts on the board, for pagination math.
    pub total_count: u64,
    /// The (normalized) page this response covers.
    pub page: u32,
    /// The (normalized) page size used for the request.
    pub page_size: u32,
}

/// Aggregated cross-board search results.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Matching posts, sorted by date descending.
    pub posts: Vec<PostRecord>,
    /// Total number of matches across all searched boards.
    pub total_count: u64,
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Opaque session token to attach to authenticated downloads.
    pub token: String,
    /// Member access level; gates premium boards.
    pub level: u8,
    /// Member login id.
    pub member_id: String,
    /// Member display name.
    pub name: String,
}

/// Raw envelope shared by the list and search endpoints. The server
/// returns either `{error}` or the payload fields, never both.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub error: Option<String>,
    #[serde(default)]
    pub posts: Vec<PostRecord>,
    #[serde(default, deserialize_with = "lenient::u64_or_default")]
    pub total: u64,
}

/// Raw login response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient::u64_or_default")]
    pub level: u64,
    pub member: Option<MemberRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MemberRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nick: String,
}

pub(crate) mod lenient {
    //! Deserializers accepting JSON numbers and numeric strings alike.

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u64),
        Str(String),
    }

    /// A `u64` from either representation; malformed strings coerce to 0.
    pub fn u64_or_default<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match NumOrStr::deserialize(deserializer)? {
            NumOrStr::Num(n) => n,
            NumOrStr::Str(s) => s.trim().parse().unwrap_or_default(),
        })
    }

    /// A `String` from either representation.
    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match NumOrStr::deserialize(deserializer)? {
            NumOrStr::Num(n) => n.to_string(),
            NumOrStr::Str(s) => s,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_record_accepts_stringly_numbers() {
        let raw = r#"{
            "id": "128",
            "title": "Mountain dawn",
            "content": "<p><img src=\"/data/editor/a.jpg\"></p>",
            "thumbnail": "/data/file/wallpaper_free/thumb_a.jpg",
            "files": [
                {"source": "dawn.jpg", "size": "2048000", "content": "", "view_url": "/bbs/view_file.php?bo_table=wallpaper_free&wr_id=128&no=0"}
            ],
            "date": "2024-01-03 08:15:00",
            "author": "ridge",
            "views": "77"
        }"#;

        let post: PostRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(post.id, "128");
        assert_eq!(post.views, 77);
        assert_eq!(post.files.len(), 1);
        assert_eq!(post.files[0].size, 2_048_000);
        assert!(post.bo_table.is_none());
    }

    #[test]
    fn test_post_record_accepts_plain_numbers() {
        let raw = r#"{"id": 12, "views": 3, "date": "2024-02-01 00:00:00"}"#;
        let post: PostRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(post.id, "12");
        assert_eq!(post.views, 3);
        assert!(post.files.is_empty());
        assert!(post.thumbnail.is_empty());
    }

    #[test]
    fn test_malformed_counter_coerces_to_zero() {
        let raw = r#"{"id": "9", "views": "n/a"}"#;
        let post: PostRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(post.views, 0);
    }

    #[test]
    fn test_list_envelope_with_error_body() {
        let envelope: ListEnvelope =
            serde_json::from_str(r#"{"error": "Board not found."}"#).unwrap();
        assert_eq!(envelope.error.as_deref(), Some("Board not found."));
        assert!(envelope.posts.is_empty());
    }

    #[test]
    fn test_login_envelope_failure() {
        let envelope: LoginEnvelope =
            serde_json::from_str(r#"{"success": false, "message": "Invalid username or password."}"#)
                .unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Invalid username or password.");
        assert!(envelope.token.is_none());
    }
}
