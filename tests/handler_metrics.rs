mod common;

use axum_test::TestServer;
use mem_shortener::infrastructure::persistence::InMemoryLinkRepository;
use mem_shortener::state::AppState;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_metrics_empty() {
    let server = common::create_test_server();

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["top_domains"], json!([]));
}

#[tokio::test]
async fn test_metrics_top_domains() {
    let server = common::create_test_server();

    for url in [
        "https://example.com/a",
        "https://example.com/b",
        "https://google.com/c",
        "https://github.com/d",
    ] {
        common::shorten(&server, url).await;
    }

    let response = server.get("/metrics").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let top: Vec<&str> = json["top_domains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    // example.com leads with two links; the tie is ordered by host name
    assert_eq!(top, vec!["example.com", "github.com", "google.com"]);
}

#[tokio::test]
async fn test_metrics_limited_to_three() {
    let server = common::create_test_server();

    for url in [
        "https://a.com/1",
        "https://b.com/1",
        "https://b.com/2",
        "https://c.com/1",
        "https://c.com/2",
        "https://c.com/3",
        "https://d.com/1",
        "https://d.com/2",
        "https://d.com/3",
        "https://d.com/4",
    ] {
        common::shorten(&server, url).await;
    }

    let json = server.get("/metrics").await.json::<serde_json::Value>();

    assert_eq!(json["top_domains"], json!(["d.com", "c.com", "b.com"]));
}

#[tokio::test]
async fn test_metrics_skips_unparsable_urls() {
    let server = common::create_test_server();

    common::shorten(&server, "not a url").await;
    common::shorten(&server, "https://example.com/a").await;

    let json = server.get("/metrics").await.json::<serde_json::Value>();

    assert_eq!(json["top_domains"], json!(["example.com"]));
}

#[tokio::test]
async fn test_metrics_respects_configured_limit() {
    let state = AppState::new(Arc::new(InMemoryLinkRepository::new()), 1, 10);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    common::shorten(&server, "https://example.com/a").await;
    common::shorten(&server, "https://example.com/b").await;
    common::shorten(&server, "https://google.com/c").await;

    let json = server.get("/metrics").await.json::<serde_json::Value>();

    assert_eq!(json["top_domains"], json!(["example.com"]));
}
