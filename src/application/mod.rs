//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and code resolution
//! - [`services::stats_service::StatsService`] - Destination domain statistics

pub mod services;
