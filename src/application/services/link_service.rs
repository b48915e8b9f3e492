//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Default number of codes tried before shortening gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving short codes.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service with the default collision retry budget.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_max_attempts(link_repository, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a new link service trying at most `max_attempts` codes per URL.
    pub fn with_max_attempts(link_repository: Arc<L>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns the short link for `long_url`, creating it if needed.
    ///
    /// The URL is stored exactly as given; no validation is performed.
    ///
    /// # Deduplication
    ///
    /// Shortening the same URL again returns the existing link unchanged.
    ///
    /// # Code Generation
    ///
    /// A random 7-character code is generated. If it is already taken, a new
    /// one is generated, up to the configured number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every attempt collided.
    pub async fn shorten(&self, long_url: &str) -> Result<Link, AppError> {
        if let Some(existing) = self.link_repository.find_by_long_url(long_url).await? {
            tracing::debug!(code = %existing.code, "URL already shortened");
            return Ok(existing);
        }

        for attempt in 1..=self.max_attempts {
            let new_link = NewLink::new(generate_code(), long_url);

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(code = %link.code, id = link.id, "Short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict(reason)) => {
                    tracing::warn!(attempt, "Short code collision: {}", reason);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "Failed to generate unique code after {} attempts",
            self.max_attempts
        )))
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                tracing::debug!(code, "Short code not found");
                AppError::not_found("Short URL not found")
            })
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}
