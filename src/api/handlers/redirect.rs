//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// Answers with `303 See Other` and the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    // Stored URLs are not validated, so the header value can still be rejected.
    let location = HeaderValue::try_from(link.long_url.as_str()).map_err(|e| {
        AppError::internal(format!(
            "Stored URL for '{}' is not a valid Location header: {}",
            code, e
        ))
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
