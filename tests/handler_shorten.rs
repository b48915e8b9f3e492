mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");

    let json = response.json::<serde_json::Value>();
    let code = json["short_url"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let server = common::create_test_server();

    let code1 = common::shorten(&server, "https://example.com").await;
    let code2 = common::shorten(&server, "https://example.com").await;

    assert_eq!(code1, code2);
}

#[tokio::test]
async fn test_shorten_different_urls_get_different_codes() {
    let server = common::create_test_server();

    let code1 = common::shorten(&server, "https://example.com/a").await;
    let code2 = common::shorten(&server, "https://example.com/b").await;

    assert_ne!(code1, code2);
}

#[tokio::test]
async fn test_shorten_accepts_unvalidated_url() {
    let server = common::create_test_server();

    let code = common::shorten(&server, "definitely not a url").await;
    assert_eq!(code.len(), 7);
}

#[tokio::test]
async fn test_shorten_wrong_method() {
    let server = common::create_test_server();

    let response = server.get("/shorten").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Method not allowed");
}

#[tokio::test]
async fn test_shorten_invalid_json() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .bytes("{\"url\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request data");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_wrong_url_type() {
    let server = common::create_test_server();

    let response = server.post("/shorten").json(&json!({ "url": 42 })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_plain_text_body() {
    let server = common::create_test_server();

    let response = server.post("/shorten").text("https://example.com").await;

    response.assert_status_bad_request();
}
