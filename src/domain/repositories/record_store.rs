//! Repository trait for URL record storage.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Errors raised by [`RecordStore`] implementations.
///
/// Constraint violations are classified here so callers never have to
/// inspect driver-specific error codes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Short code '{0}' already exists")]
    DuplicateShortCode(String),

    #[error("Original URL is already shortened")]
    DuplicateOriginalUrl,

    #[error("Invalid creation range: {start} is after {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for URL records.
///
/// Records are immutable once inserted; there is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryRecordStore`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_record.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Finds a record by exact match on its original URL.
    ///
    /// Used to make creation idempotent per original URL.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, StoreError>;

    /// Inserts a new record with a fresh id and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateShortCode`] if `short_url` is taken.
    /// Returns [`StoreError::DuplicateOriginalUrl`] if another insert for the
    /// same original URL won a race.
    async fn insert(&self, original_url: &str, short_url: &str) -> Result<UrlRecord, StoreError>;

    /// Finds a record by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError>;

    /// Finds a record by its short code.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Returns all records whose `created_at` lies in `[start, end]`.
    ///
    /// Records come back in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRange`] if `start > end`.
    async fn find_by_created_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<UrlRecord>, StoreError>;

    /// Counts all stored records.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Rejects a range whose start lies after its end.
pub(crate) fn ensure_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), StoreError> {
    if start > end {
        return Err(StoreError::InvalidRange { start, end });
    }
    Ok(())
}
