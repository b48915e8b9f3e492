//! DTOs for metrics endpoint.

use serde::Serialize;

/// Most common destination hosts, most frequent first.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub top_domains: Vec<String>,
}
