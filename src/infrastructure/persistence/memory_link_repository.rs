//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Mapping table plus the reverse index used for deduplication.
#[derive(Default)]
struct LinkTable {
    by_code: HashMap<String, Link>,
    code_by_url: HashMap<String, String>,
    last_id: u64,
}

/// Process-local link storage guarded by a read/write lock.
///
/// Writers are serialized; lookups and statistics snapshots share the read lock.
/// Contents live as long as the process and are empty on every start.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    table: RwLock<LinkTable>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut table = self.table.write().await;

        if let Some(existing) = table
            .code_by_url
            .get(&new_link.long_url)
            .and_then(|code| table.by_code.get(code))
        {
            return Ok(existing.clone());
        }

        if table.by_code.contains_key(&new_link.code) {
            return Err(AppError::conflict(format!(
                "Short code '{}' is already taken",
                new_link.code
            )));
        }

        table.last_id += 1;
        let link = Link::new(table.last_id, new_link.code, new_link.long_url, Utc::now());

        table
            .code_by_url
            .insert(link.long_url.clone(), link.code.clone());
        table.by_code.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.read().await;
        Ok(table.by_code.get(code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .code_by_url
            .get(long_url)
            .and_then(|code| table.by_code.get(code))
            .cloned())
    }

    async fn all_long_urls(&self) -> Result<Vec<String>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .by_code
            .values()
            .map(|link| link.long_url.clone())
            .collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.table.read().await.by_code.len())
    }
}
