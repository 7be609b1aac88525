//! Integration tests for the temp-file downloader.
//!
//! These exercise the redirect and cleanup behavior against a local mock
//! server with a throwaway spool directory per test.

use wallboard_platform::{PlatformError, TempDownloader};

fn spool() -> (TempDownloader, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let downloader = TempDownloader::with_dir(dir.path().to_path_buf()).unwrap();
    (downloader, dir)
}

#[tokio::test]
async fn test_download_writes_body_to_named_file() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/asset.jpg")
        .with_body(b"jpeg-bytes".as_slice())
        .create_async()
        .await;

    let (downloader, dir) = spool();
    let path = downloader
        .download(&format!("{}/asset.jpg", server.url()), "dawn.jpg")
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("dawn.jpg"));
    assert_eq!(std::fs::read(&path).unwrap(), b"jpeg-bytes");
}

#[tokio::test]
async fn test_download_follows_exactly_one_redirect() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/file_download.php")
        .with_status(302)
        .with_header("location", "/bbs/download.php")
        .create_async()
        .await;
    server
        .mock("GET", "/bbs/download.php")
        .with_body(b"real-asset".as_slice())
        .create_async()
        .await;

    let (downloader, _dir) = spool();
    let path = downloader
        .download(&format!("{}/api/file_download.php", server.url()), "a.jpg")
        .await
        .unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"real-asset");
}

#[tokio::test]
async fn test_second_redirect_hop_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/one")
        .with_status(302)
        .with_header("location", "/two")
        .create_async()
        .await;
    server
        .mock("GET", "/two")
        .with_status(302)
        .with_header("location", "/three")
        .create_async()
        .await;

    let (downloader, dir) = spool();
    let error = downloader
        .download(&format!("{}/one", server.url()), "a.jpg")
        .await
        .unwrap_err();

    assert!(matches!(error, PlatformError::Download(_)));
    assert!(!dir.path().join("a.jpg").exists());
}

#[tokio::test]
async fn test_non_success_status_leaves_no_file() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/gone.jpg")
        .with_status(404)
        .create_async()
        .await;

    let (downloader, dir) = spool();
    let error = downloader
        .download(&format!("{}/gone.jpg", server.url()), "gone.jpg")
        .await
        .unwrap_err();

    match error {
        PlatformError::Download(message) => assert!(message.contains("404")),
        other => panic!("expected Download error, got {other:?}"),
    }
    assert!(!dir.path().join("gone.jpg").exists());
}

#[tokio::test]
async fn test_forbidden_download_surfaces_status() {
    // The board answers 403 when the member's level is below the board's
    // gate; the client must show a denial, not save the error body.
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/file_download.php")
        .with_status(403)
        .with_body(r#"{"error": "Forbidden"}"#)
        .create_async()
        .await;

    let (downloader, dir) = spool();
    let error = downloader
        .download(
            &format!("{}/api/file_download.php", server.url()),
            "locked.jpg",
        )
        .await
        .unwrap_err();

    match error {
        PlatformError::Download(message) => assert!(message.contains("403")),
        other => panic!("expected Download error, got {other:?}"),
    }
    assert!(!dir.path().join("locked.jpg").exists());
}
