//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "aB3xY9q" }
/// ```
///
/// Repeating the request with the same URL returns the same code.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or lacks `url`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;

    let link = state.link_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: link.code,
    }))
}

/// Rejects requests using a method the route does not serve.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
