//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL and its metadata.
///
/// `id` and `created_at` are assigned by the store at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, short_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_url,
            created_at,
        }
    }

    /// Returns true if the record was created within the closed interval.
    pub fn created_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start <= self.created_at && self.created_at <= end
    }
}
