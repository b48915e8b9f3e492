//! # Mem Shortener
//!
//! A small URL shortening service built with Axum. Links live in memory for
//! the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - Shortening, resolution and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - Lock-guarded in-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` with `{"url": "..."}` returns `{"short_url": "<code>"}`
//! - `GET /r/{code}` redirects (303) to the original URL
//! - `GET /metrics` returns the most common destination hosts
//! - `GET /health` reports liveness and the number of stored links
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
