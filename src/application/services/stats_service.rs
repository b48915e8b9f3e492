//! Destination domain statistics.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_host::extract_host;

/// Default number of hosts reported by the metrics endpoint.
pub const DEFAULT_TOP_DOMAINS: usize = 3;

/// Service aggregating stored links by destination host.
///
/// Statistics are best-effort: URLs whose host cannot be extracted are left
/// out of the counts instead of failing the request.
pub struct StatsService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Counts stored links per destination host.
    ///
    /// Works on a single snapshot of the mapping table, so concurrent writers
    /// never produce a torn view. The result does not depend on the order in
    /// which links were created.
    pub async fn domain_counts(&self) -> Result<HashMap<String, usize>, AppError> {
        let urls = self.repository.all_long_urls().await?;
        Ok(count_domains(urls.iter().map(String::as_str)))
    }

    /// Returns the `n` most common destination hosts.
    ///
    /// See [`top_domains`] for ordering rules.
    pub async fn top_domains(&self, n: usize) -> Result<Vec<String>, AppError> {
        let counts = self.domain_counts().await?;
        Ok(top_domains(&counts, n))
    }
}

/// Tallies URLs by host, skipping the ones without a parsable host.
pub fn count_domains<'a>(urls: impl IntoIterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();

    for url in urls {
        match extract_host(url) {
            Ok(host) => *counts.entry(host).or_insert(0) += 1,
            Err(e) => tracing::debug!(url, "Skipping URL in domain statistics: {}", e),
        }
    }

    counts
}

/// Picks the `n` hosts with the highest counts.
///
/// Hosts are ordered by descending count; equal counts are ordered by host
/// name so the result is reproducible. Returns fewer than `n` hosts when fewer
/// exist, and nothing for `n == 0`.
pub fn top_domains(counts: &HashMap<String, usize>, n: usize) -> Vec<String> {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by_key(|&(host, count)| (Reverse(*count), host));

    entries
        .into_iter()
        .take(n)
        .map(|(host, _)| host.clone())
        .collect()
}
