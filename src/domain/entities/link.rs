//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL: the mapping between a short code and the original URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Insertion sequence number, starting at 1.
    pub id: u64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: u64, code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc1234".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc1234");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink::new("xyz7890", "https://rust-lang.org");

        assert_eq!(new_link.code, "xyz7890");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}
