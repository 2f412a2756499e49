mod common;

use serde_json::json;
use std::collections::HashSet;
use urlshort::domain::repositories::RecordStore;

#[tokio::test]
async fn test_shorten_creates_record() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");
    assert!(json["short_url"].is_string());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let (server, store) = common::create_test_server();

    let first = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    second.assert_status_ok();

    let second = second.json::<serde_json::Value>();
    assert_eq!(first["short_url"], second["short_url"]);
    assert!(second.get("original_url").is_none());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let (server, store) = common::create_test_server();

    let mut codes = HashSet::new();
    for i in 0..50 {
        let json = server
            .post("/shorten")
            .json(&json!({ "original_url": format!("https://example.com/{i}") }))
            .await
            .json::<serde_json::Value>();

        codes.insert(json["short_url"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 50);
    assert_eq!(store.count().await.unwrap(), 50);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (server, store) = common::create_test_server();

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn test_shorten_without_json_body() {
    let (server, _store) = common::create_test_server();

    let response = server.post("/shorten").text("original_url=x").await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn test_shorten_accepts_non_url_strings() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "definitely not a url" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["original_url"],
        "definitely not a url"
    );
}
