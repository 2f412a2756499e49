mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_expand_round_trip() {
    let (server, _store) = common::create_test_server();

    let created = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://rust-lang.org/learn?x=1#y" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_url"].as_str().unwrap();

    let response = server.get(&format!("/expand/{code}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://rust-lang.org/learn?x=1#y" })
    );
}

#[tokio::test]
async fn test_expand_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/expand/doesnotexist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn test_expand_is_case_sensitive() {
    let (server, store) = common::create_test_server();
    common::create_record_at(&store, "https://a.io", "AbCdEf1234", chrono::Utc::now()).await;

    server.get("/expand/AbCdEf1234").await.assert_status_ok();
    server
        .get("/expand/abcdef1234")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expand_invalid_utf8_segment_is_json_bad_request() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/expand/%FF").await;

    response.assert_status_bad_request();
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Invalid path parameter" })
    );
}
