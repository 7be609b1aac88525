//! Orchestration of the detail view's download and apply pipelines.
//!
//! These functions own the ordering guarantees (entitlement gate before
//! any work, download before wallpaper set, no bridge call after a
//! failure) so they can be exercised against a scripted bridge without a
//! GUI or a server.

use tracing::info;
use wallboard_api::BoardClient;
use wallboard_platform::{PlatformBridge, WallpaperTarget};

use crate::error::{Error, Result};
use crate::post::Post;
use crate::session::Session;

/// Resolves the detail view's preview image: the first image attachment's
/// view URL, else the post thumbnail, each made absolute against the
/// configured base. `None` when the post offers neither.
#[must_use]
pub fn preview_url(client: &BoardClient, post: &Post) -> Option<String> {
    if let Some(attachment) = post.first_image()
        && !attachment.view_url.is_empty()
    {
        return Some(client.asset_url(&attachment.view_url));
    }
    if post.thumbnail.is_empty() {
        None
    } else {
        Some(client.asset_url(&post.thumbnail))
    }
}

/// Downloads the post's first image-or-video attachment to a temp file
/// and sets it as the wallpaper of `target`.
///
/// # Errors
///
/// Fails fast with [`Error::NotEntitled`] or [`Error::NoMediaAttachment`]
/// before touching the bridge; download and wallpaper failures surface as
/// [`Error::Platform`]. The wallpaper step never runs after a failed
/// download.
pub async fn apply_wallpaper(
    bridge: &dyn PlatformBridge,
    client: &BoardClient,
    session: &Session,
    post: &Post,
    target: &WallpaperTarget,
) -> Result<()> {
    if !session.is_entitled(&post.board_id) {
        return Err(Error::NotEntitled);
    }
    let (index, attachment) = post.first_media().ok_or(Error::NoMediaAttachment)?;

    let url = client.download_url(&post.board_id, &post.id, index, session.token.as_deref());
    let local_path = bridge
        .download_to_temp(&url, &attachment.source_filename)
        .await?;
    bridge.set_wallpaper(&local_path, target).await?;

    info!(post = %post.id, board = %post.board_id, "wallpaper applied");
    Ok(())
}

/// Opens the post's first attachment (index 0, any type) in the browser
/// via the redirecting download endpoint.
///
/// # Errors
///
/// Fails fast with [`Error::NoAttachments`] when the post has none; the
/// browser is never invoked in that case.
pub async fn open_download_page(
    bridge: &dyn PlatformBridge,
    client: &BoardClient,
    session: &Session,
    post: &Post,
) -> Result<()> {
    if post.files.is_empty() {
        return Err(Error::NoAttachments);
    }
    let url = client.download_url(&post.board_id, &post.id, 0, session.token.as_deref());
    bridge.open_in_browser(&url).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use wallboard_platform::{DisplayTarget, PlatformError};

    use super::*;
    use crate::session::PREMIUM_LEVEL;

    /// Bridge double that records calls and fails on demand.
    #[derive(Default)]
    struct ScriptedBridge {
        fail_download_with: Option<String>,
        fail_wallpaper_with: Option<String>,
        downloads: Mutex<Vec<(String, String)>>,
        applied: Mutex<Vec<(PathBuf, WallpaperTarget)>>,
        opened: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PlatformBridge for ScriptedBridge {
        async fn get_displays(&self) -> wallboard_platform::Result<Vec<DisplayTarget>> {
            Ok(Vec::new())
        }

        async fn set_wallpaper(
            &self,
            image_path: &Path,
            target: &WallpaperTarget,
        ) -> wallboard_platform::Result<()> {
            if let Some(message) = &self.fail_wallpaper_with {
                return Err(PlatformError::Wallpaper(message.clone()));
            }
            self.applied
                .lock()
                .unwrap()
                .push((image_path.to_path_buf(), target.clone()));
            Ok(())
        }

        async fn download_to_temp(
            &self,
            url: &str,
            file_name: &str,
        ) -> wallboard_platform::Result<PathBuf> {
            if let Some(message) = &self.fail_download_with {
                return Err(PlatformError::Download(message.clone()));
            }
            self.downloads
                .lock()
                .unwrap()
                .push((url.to_string(), file_name.to_string()));
            Ok(PathBuf::from("/tmp").join(file_name))
        }

        async fn open_in_browser(&self, url: &str) -> wallboard_platform::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn client() -> BoardClient {
        BoardClient::new("http://boards.example.com").unwrap()
    }

    fn premium_session() -> Session {
        Session {
            is_logged_in: true,
            level: PREMIUM_LEVEL,
            token: Some("sess-1".into()),
            display_name: "ridge".into(),
        }
    }

    fn post(board: &str, files: &[&str]) -> Post {
        let raw = format!(
            r#"{{"id": "42", "date": "2024-01-01 00:00:00", "files": [{}]}}"#,
            files
                .iter()
                .map(|f| format!(r#"{{"source": "{f}"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        Post::from_record(serde_json::from_str(&raw).unwrap(), board)
    }

    #[tokio::test]
    async fn test_apply_downloads_then_sets_wallpaper() {
        let bridge = ScriptedBridge::default();
        let post = post("wallpaper_free", &["notes.txt", "dawn.jpg"]);

        apply_wallpaper(
            &bridge,
            &client(),
            &premium_session(),
            &post,
            &WallpaperTarget::All,
        )
        .await
        .unwrap();

        let downloads = bridge.downloads.lock().unwrap();
        assert_eq!(downloads.len(), 1);
        // The media attachment is at index 1; the URL must address it and
        // carry the session token.
        assert!(downloads[0].0.contains("bo_table=wallpaper_free"));
        assert!(downloads[0].0.contains("wr_id=42"));
        assert!(downloads[0].0.contains("no=1"));
        assert!(downloads[0].0.contains("token=sess-1"));
        assert_eq!(downloads[0].1, "dawn.jpg");

        let applied = bridge.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].0, PathBuf::from("/tmp/dawn.jpg"));
        assert_eq!(applied[0].1, WallpaperTarget::All);
    }

    #[tokio::test]
    async fn test_apply_without_media_fails_before_any_bridge_call() {
        let bridge = ScriptedBridge::default();
        let post = post("wallpaper_free", &["notes.txt"]);

        let error = apply_wallpaper(
            &bridge,
            &client(),
            &premium_session(),
            &post,
            &WallpaperTarget::All,
        )
        .await
        .unwrap_err();

        assert!(matches!(error, Error::NoMediaAttachment));
        assert!(bridge.downloads.lock().unwrap().is_empty());
        assert!(bridge.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_download_skips_the_wallpaper_step() {
        let bridge = ScriptedBridge {
            fail_download_with: Some("server responded with 403 Forbidden".into()),
            ..Default::default()
        };
        let post = post("wallpaper_premium", &["dawn.jpg"]);

        let error = apply_wallpaper(
            &bridge,
            &client(),
            &premium_session(),
            &post,
            &WallpaperTarget::Display("eDP-1".into()),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, Error::Platform(PlatformError::Download(_))));
        assert!(bridge.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wallpaper_failure_surfaces_its_message() {
        let bridge = ScriptedBridge {
            fail_wallpaper_with: Some("no desktop session".into()),
            ..Default::default()
        };
        let post = post("wallpaper_free", &["dawn.jpg"]);

        let error = apply_wallpaper(
            &bridge,
            &client(),
            &premium_session(),
            &post,
            &WallpaperTarget::All,
        )
        .await
        .unwrap_err();

        assert!(error.to_string().contains("no desktop session"));
    }

    #[tokio::test]
    async fn test_client_gate_and_server_denial_agree() {
        // Same post, two enforcement points: the local gate for a level-1
        // session and the server's 403 for a tampering client must both
        // come out as a user-visible denial with no wallpaper set.
        let post = post("wallpaper_premium", &["dawn.jpg"]);

        let gate_bridge = ScriptedBridge::default();
        let gate_error = apply_wallpaper(
            &gate_bridge,
            &client(),
            &Session::logged_out(),
            &post,
            &WallpaperTarget::All,
        )
        .await
        .unwrap_err();
        assert!(matches!(gate_error, Error::NotEntitled));
        assert!(gate_bridge.downloads.lock().unwrap().is_empty());

        let server_bridge = ScriptedBridge {
            fail_download_with: Some("server responded with 403 Forbidden".into()),
            ..Default::default()
        };
        let server_error = apply_wallpaper(
            &server_bridge,
            &client(),
            &premium_session(),
            &post,
            &WallpaperTarget::All,
        )
        .await
        .unwrap_err();

        assert!(!gate_error.to_string().is_empty());
        assert!(server_error.to_string().contains("403"));
        assert!(server_bridge.applied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_download_page_uses_first_attachment_index() {
        let bridge = ScriptedBridge::default();
        let post = post("wallpaper_free", &["notes.txt", "dawn.jpg"]);

        open_download_page(&bridge, &client(), &premium_session(), &post)
            .await
            .unwrap();

        let opened = bridge.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].contains("no=0"));
    }

    #[tokio::test]
    async fn test_download_page_with_no_attachments_never_opens_browser() {
        let bridge = ScriptedBridge::default();
        let post = post("wallpaper_free", &[]);

        let error = open_download_page(&bridge, &client(), &Session::logged_out(), &post)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::NoAttachments));
        assert_eq!(error.to_string(), "No downloadable file found.");
        assert!(bridge.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_preview_prefers_image_attachment_over_thumbnail() {
        let raw = r#"{"id": "5", "thumbnail": "/data/thumb.jpg", "date": "",
            "files": [{"source": "dawn.jpg", "view_url": "/bbs/view_file.php?no=0"}]}"#;
        let post = Post::from_record(serde_json::from_str(raw).unwrap(), "wallpaper_free");

        let url = preview_url(&client(), &post).unwrap();
        assert_eq!(url, "http://boards.example.com/bbs/view_file.php?no=0");
    }

    #[test]
    fn test_preview_falls_back_to_thumbnail() {
        let raw = r#"{"id": "5", "thumbnail": "/data/thumb.jpg", "date": "",
            "files": [{"source": "clip.mp4", "view_url": "/bbs/view_file.php?no=0"}]}"#;
        let post = Post::from_record(serde_json::from_str(raw).unwrap(), "wallpaper_free");

        let url = preview_url(&client(), &post).unwrap();
        assert_eq!(url, "http://boards.example.com/data/thumb.jpg");
    }

    #[test]
    fn test_preview_absent_when_post_has_no_art() {
        let post = post("wallpaper_free", &[]);
        assert!(preview_url(&client(), &post).is_none());
    }
}
