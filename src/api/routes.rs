//! API route configuration.

use crate::api::handlers::{
    health_handler, method_not_allowed_handler, metrics_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`   - Shorten a URL (any other method answers 405)
/// - `GET  /r/{code}`  - Redirect to the original URL
/// - `GET  /metrics`   - Top destination domains
/// - `GET  /health`    - Liveness probe
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).fallback(method_not_allowed_handler),
        )
        .route("/r/{code}", get(redirect_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
}
