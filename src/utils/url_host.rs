//! Host extraction from stored URLs.

use url::Url;

/// Errors that can occur while extracting a host.
#[derive(Debug, thiserror::Error)]
pub enum HostExtractionError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host component")]
    MissingHost,
}

/// Extracts the host component of a URL, including an explicit port.
///
/// Default ports for the scheme are dropped by the parser, so
/// `https://example.com:443/` yields `example.com` while
/// `http://example.com:8080/` yields `example.com:8080`. Hostnames come back
/// lowercased for the special schemes (`http`, `https`, ...).
///
/// # Errors
///
/// Returns [`HostExtractionError::InvalidFormat`] if the string is not an
/// absolute URL, and [`HostExtractionError::MissingHost`] for URLs without an
/// authority (`mailto:`, `data:`, ...).
pub fn extract_host(input: &str) -> Result<String, HostExtractionError> {
    let url = Url::parse(input).map_err(|e| HostExtractionError::InvalidFormat(e.to_string()))?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(HostExtractionError::MissingHost)?;

    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
