//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code → URL mapping table.
///
/// Links are only ever created; there is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - lock-guarded in-memory table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// The URL check and the insert happen atomically. If the long URL is
    /// already mapped, the existing link is returned and nothing is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken by another URL.
    /// Existing mappings are never overwritten.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original long URL.
    ///
    /// Used to check if a URL has already been shortened.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Returns every stored long URL from a single consistent snapshot.
    async fn all_long_urls(&self) -> Result<Vec<String>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
