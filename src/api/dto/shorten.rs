//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL, stored as given.
    pub url: String,
}

/// Response carrying the short code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
