//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional; the defaults reproduce the stock service.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8084`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `METRICS_TOP_N` - Hosts reported by `/metrics` (default: 3, range: 1-100)
//! - `SHORTEN_MAX_ATTEMPTS` - Codes tried per URL on collision (default: 10, range: 1-100)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::application::services::stats_service::DEFAULT_TOP_DOMAINS;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8084";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Number of hosts returned by the metrics endpoint.
    pub top_domains: usize,
    /// Upper bound on generated codes per shorten call.
    pub shorten_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            top_domains: DEFAULT_TOP_DOMAINS,
            shorten_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let top_domains = parse_var("METRICS_TOP_N")?.unwrap_or(DEFAULT_TOP_DOMAINS);
        let shorten_max_attempts =
            parse_var("SHORTEN_MAX_ATTEMPTS")?.unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            top_domains,
            shorten_max_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `top_domains` or `shorten_max_attempts` is outside 1-100
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.socket_addr()?;

        if !(1..=100).contains(&self.top_domains) {
            anyhow::bail!(
                "METRICS_TOP_N must be between 1 and 100, got {}",
                self.top_domains
            );
        }

        if !(1..=100).contains(&self.shorten_max_attempts) {
            anyhow::bail!(
                "SHORTEN_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.shorten_max_attempts
            );
        }

        Ok(())
    }

    /// Parses the bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not in `host:port` form.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Metrics top domains: {}", self.top_domains);
        tracing::info!("  Shorten max attempts: {}", self.shorten_max_attempts);
    }
}

/// Reads and parses an optional numeric variable.
fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got '{value}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
