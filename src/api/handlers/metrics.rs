//! Handler for destination domain metrics.

use axum::{Json, extract::State};

use crate::api::dto::metrics::MetricsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports the most common destination hosts among stored links.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// ```json
/// { "top_domains": ["example.com", "github.com", "google.com"] }
/// ```
///
/// The list holds at most `METRICS_TOP_N` hosts (3 by default), most frequent
/// first, ties ordered by host name.
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    let top_domains = state.stats_service.top_domains(state.top_domains).await?;

    Ok(Json(MetricsResponse { top_domains }))
}
