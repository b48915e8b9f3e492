//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::application::services::stats_service::DEFAULT_TOP_DOMAINS;
use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Application state cloned into each request.
///
/// Both services share one repository, so statistics always reflect the links
/// the shortener has created.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
    /// Number of hosts reported by `/metrics`.
    pub top_domains: usize,
}

impl AppState {
    /// Builds the state around an existing repository.
    pub fn new(
        repository: Arc<InMemoryLinkRepository>,
        top_domains: usize,
        max_attempts: usize,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::with_max_attempts(
                repository.clone(),
                max_attempts,
            )),
            stats_service: Arc::new(StatsService::new(repository)),
            top_domains,
        }
    }

    /// Builds the state from configuration with an empty repository.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryLinkRepository::new()),
            config.top_domains,
            config.shorten_max_attempts,
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryLinkRepository::new()),
            DEFAULT_TOP_DOMAINS,
            DEFAULT_MAX_ATTEMPTS,
        )
    }
}
