//! Integration tests for the board API client.
//!
//! These run against a local mock HTTP server; no real board deployment is
//! required.

use mockito::Matcher;
use wallboard_api::{ApiError, BoardClient, DEFAULT_PAGE_SIZE};

fn page_body(ids: &[u32], total: u64) -> String {
    let posts: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id": "{id}", "title": "post {id}", "content": "", "thumbnail": "",
                    "files": [], "date": "2024-01-0{} 10:00:00", "author": "a", "views": "{id}"}}"#,
                (id % 9) + 1
            )
        })
        .collect();
    format!(
        r#"{{"posts": [{}], "total": {total}, "page": 1, "limit": 20}}"#,
        posts.join(",")
    )
}

#[tokio::test]
async fn test_list_posts_parses_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/board_list.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("bo_table".into(), "wallpaper_free".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "20".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(page_body(&[1, 2, 3], 45))
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let page = client.list_posts("wallpaper_free", 1, 20).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.posts.len(), 3);
    assert_eq!(page.total_count, 45);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 20);
}

#[tokio::test]
async fn test_list_posts_clamps_non_positive_paging() {
    let mut server = mockito::Server::new_async().await;
    // The mock only matches the corrected values; the test fails if the
    // raw zeros leak through to the request.
    let mock = server
        .mock("GET", "/api/board_list.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), DEFAULT_PAGE_SIZE.to_string()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(page_body(&[], 0))
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let page = client.list_posts("wallpaper_free", 0, 0).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
}

#[tokio::test]
async fn test_list_posts_surfaces_error_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/board_list.php")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Board not found."}"#)
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let error = client.list_posts("nope", 1, 20).await.unwrap_err();

    match error {
        ApiError::Remote(message) => assert_eq!(message, "Board not found."),
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_posts_fails_on_server_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/board_list.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let error = client.list_posts("wallpaper_free", 1, 20).await.unwrap_err();
    assert!(matches!(error, ApiError::Remote(_)));
}

#[tokio::test]
async fn test_short_search_term_never_hits_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/search.php")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let error = client.search_posts("x").await.unwrap_err();

    assert!(matches!(error, ApiError::Validation(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_results_are_sorted_date_descending() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/search.php")
        .match_query(Matcher::UrlEncoded("stx".into(), "dawn".into()))
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"posts": [
                {"id": "1", "bo_table": "wallpaper_free", "date": "2024-01-01 09:00:00"},
                {"id": "2", "bo_table": "wallpaper_premium", "date": "2024-01-03 09:00:00"},
                {"id": "3", "bo_table": "wallpaper_video", "date": "2024-01-02 09:00:00"}
            ], "total": 3}"#,
        )
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let results = client.search_posts("dawn").await.unwrap();

    let dates: Vec<&str> = results.posts.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(
        dates,
        [
            "2024-01-03 09:00:00",
            "2024-01-02 09:00:00",
            "2024-01-01 09:00:00"
        ]
    );
    assert_eq!(results.total_count, 3);
}

#[tokio::test]
async fn test_login_success_builds_session_fields() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/login.php")
        .match_body(Matcher::PartialJsonString(
            r#"{"username": "ridge", "password": "pw"}"#.into(),
        ))
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success": true, "message": "Login successful.", "token": "sess-1",
                "level": "5", "member": {"id": "ridge", "name": "Ridge", "nick": "ridge_k", "email": "r@example.com"}}"#,
        )
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let outcome = client.login("ridge", "pw").await.unwrap();

    assert_eq!(outcome.token, "sess-1");
    assert_eq!(outcome.level, 5);
    assert_eq!(outcome.member_id, "ridge");
    assert_eq!(outcome.name, "ridge_k");
}

#[tokio::test]
async fn test_login_rejected_by_server() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/login.php")
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "message": "Invalid username or password."}"#)
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    let error = client.login("ridge", "wrong").await.unwrap_err();

    match error {
        ApiError::Auth(message) => assert_eq!(message, "Invalid username or password."),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_with_empty_credentials_never_hits_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/login.php")
        .expect(0)
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    assert!(matches!(
        client.login("", "pw").await.unwrap_err(),
        ApiError::Auth(_)
    ));
    assert!(matches!(
        client.login("ridge", "   ").await.unwrap_err(),
        ApiError::Auth(_)
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_swallows_server_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/logout.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = BoardClient::new(&server.url()).unwrap();
    // Must not panic or surface an error.
    client.logout("sess-1").await;
}
