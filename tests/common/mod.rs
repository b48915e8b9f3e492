#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use mem_shortener::api::routes::routes;
use mem_shortener::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::default()
}

pub fn create_test_app(state: AppState) -> Router {
    routes().with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

/// Shortens `url` through the API and returns the code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await;

    response.assert_status_ok();

    response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string()
}
