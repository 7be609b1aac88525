//! Post and attachment domain model, plus the board catalog.

use wallboard_api::{FileRecord, PostRecord};

/// Extensions accepted as wallpaper previews.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Extensions accepted for the apply pipeline (images plus video
/// wallpapers).
const MEDIA_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "mp4"];

/// One board (category) on the remote server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Server-side board table name.
    pub id: &'static str,
    /// Label shown in the sidebar.
    pub title: &'static str,
}

/// The fixed board catalog, in sidebar order. Search fans out over all of
/// these.
pub const BOARDS: [Board; 3] = [
    Board {
        id: "wallpaper_free",
        title: "Home",
    },
    Board {
        id: "wallpaper_premium",
        title: "Premium",
    },
    Board {
        id: "wallpaper_video",
        title: "Video",
    },
];

/// Board loaded on startup.
pub const DEFAULT_BOARD: &str = "wallpaper_free";

/// Globally unique post address across the aggregate store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostKey {
    /// Source board.
    pub board_id: String,
    /// Post id within that board.
    pub post_id: String,
}

/// One attachment on a post. Order within [`Post::files`] is significant:
/// the index addresses the attachment in download requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Name shown to the user.
    pub display_name: String,
    /// Original filename on the server; also the suggested download name.
    pub source_filename: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Server URL for viewing the attachment.
    pub view_url: String,
}

impl Attachment {
    /// Whether the filename carries an image extension.
    #[must_use]
    pub fn is_image(&self) -> bool {
        has_extension(&self.source_filename, &IMAGE_EXTENSIONS)
    }

    /// Whether the filename carries an image or video extension.
    #[must_use]
    pub fn is_media(&self) -> bool {
        has_extension(&self.source_filename, &MEDIA_EXTENSIONS)
    }

    fn from_record(record: FileRecord) -> Self {
        let display_name = if record.content.trim().is_empty() {
            record.source.clone()
        } else {
            record.content
        };
        Self {
            display_name,
            source_filename: record.source,
            size_bytes: record.size,
            view_url: record.view_url,
        }
    }
}

/// One board entry. Immutable once fetched; re-fetching the same id may
/// refresh `views`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Board the post was fetched from (store-assigned, see
    /// [`crate::PostStore`]).
    pub board_id: String,
    /// Server-assigned id, unique within the board.
    pub id: String,
    /// Title, HTML-decoded by the server.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Raw HTML body; opaque to the client.
    pub content: String,
    /// Thumbnail path resolved by the server, possibly empty.
    pub thumbnail: String,
    /// Attachments in server order.
    pub files: Vec<Attachment>,
    /// Server datetime string; doubles as the sort key.
    pub date: String,
    /// View counter.
    pub views: u64,
}

impl Post {
    /// Converts a wire record, tagging it with `board_id` (used when the
    /// record itself carries no board, which is the case for list
    /// responses).
    #[must_use]
    pub fn from_record(record: PostRecord, board_id: &str) -> Self {
        let board_id = record
            .bo_table
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| board_id.to_string());
        Self {
            board_id,
            id: record.id,
            title: record.title,
            author: record.author,
            content: record.content,
            thumbnail: record.thumbnail,
            files: record.files.into_iter().map(Attachment::from_record).collect(),
            date: record.date,
            views: record.views,
        }
    }

    /// The post's globally unique address.
    #[must_use]
    pub fn key(&self) -> PostKey {
        PostKey {
            board_id: self.board_id.clone(),
            post_id: self.id.clone(),
        }
    }

    /// First attachment with an image extension, for the detail preview.
    #[must_use]
    pub fn first_image(&self) -> Option<&Attachment> {
        self.files.iter().find(|file| file.is_image())
    }

    /// First attachment usable as a wallpaper, with its index for the
    /// download request.
    #[must_use]
    pub fn first_media(&self) -> Option<(usize, &Attachment)> {
        self.files.iter().enumerate().find(|(_, file)| file.is_media())
    }
}

fn has_extension(name: &str, extensions: &[&str]) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(files: &[&str]) -> PostRecord {
        let raw = format!(
            r#"{{"id": "1", "date": "2024-01-01 00:00:00", "files": [{}]}}"#,
            files
                .iter()
                .map(|f| format!(r#"{{"source": "{f}"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_first_media_skips_non_media_attachments() {
        let post = Post::from_record(record(&["readme.txt", "clip.mp4", "a.jpg"]), "wallpaper_video");
        let (index, attachment) = post.first_media().unwrap();
        assert_eq!(index, 1);
        assert_eq!(attachment.source_filename, "clip.mp4");
    }

    #[test]
    fn test_first_image_ignores_video() {
        let post = Post::from_record(record(&["clip.mp4", "a.PNG"]), "wallpaper_video");
        assert_eq!(post.first_image().unwrap().source_filename, "a.PNG");
    }

    #[test]
    fn test_no_media_in_any_attachment() {
        let post = Post::from_record(record(&["notes.txt"]), "wallpaper_free");
        assert!(post.first_media().is_none());
        assert!(post.first_image().is_none());
    }

    #[test]
    fn test_record_board_tag_wins_over_fallback() {
        let raw = r#"{"id": "3", "bo_table": "wallpaper_premium", "date": ""}"#;
        let record: PostRecord = serde_json::from_str(raw).unwrap();
        let post = Post::from_record(record, "wallpaper_free");
        assert_eq!(post.board_id, "wallpaper_premium");
    }

    #[test]
    fn test_display_name_falls_back_to_source() {
        let raw = r#"{"source": "dawn.jpg", "content": "  "}"#;
        let file: FileRecord = serde_json::from_str(raw).unwrap();
        let attachment = Attachment::from_record(file);
        assert_eq!(attachment.display_name, "dawn.jpg");
    }
}
