//! Process-local record store.
//!
//! Keeps every record behind a single [`RwLock`], so the uniqueness checks
//! and the insert happen atomically with respect to other writers. Data is
//! lost when the process exits.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::record_store::ensure_range;
use crate::domain::repositories::{RecordStore, StoreError};

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, UrlRecord>,
    by_short_url: HashMap<String, i64>,
    by_original_url: HashMap<String, i64>,
}

impl Inner {
    fn lookup(&self, id: Option<&i64>) -> Option<UrlRecord> {
        id.and_then(|id| self.records.get(id)).cloned()
    }
}

/// In-memory [`RecordStore`] with the same uniqueness rules as the
/// PostgreSQL schema.
#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record with an explicit creation timestamp.
    ///
    /// The timestamp is truncated to microseconds, matching the precision of
    /// the PostgreSQL `TIMESTAMPTZ` column. [`RecordStore::insert`] delegates
    /// here with the current time.
    pub async fn insert_at(
        &self,
        original_url: &str,
        short_url: &str,
        created_at: DateTime<Utc>,
    ) -> Result<UrlRecord, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.by_short_url.contains_key(short_url) {
            return Err(StoreError::DuplicateShortCode(short_url.to_string()));
        }
        if inner.by_original_url.contains_key(original_url) {
            return Err(StoreError::DuplicateOriginalUrl);
        }

        inner.next_id += 1;
        let record = UrlRecord::new(
            inner.next_id,
            original_url.to_string(),
            short_url.to_string(),
            created_at.trunc_subsecs(6),
        );

        inner.by_short_url.insert(record.short_url.clone(), record.id);
        inner
            .by_original_url
            .insert(record.original_url.clone(), record.id);
        inner.records.insert(record.id, record.clone());

        Ok(record)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.lookup(inner.by_original_url.get(original_url)))
    }

    async fn insert(&self, original_url: &str, short_url: &str) -> Result<UrlRecord, StoreError> {
        self.insert_at(original_url, short_url, Utc::now()).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(&id).cloned())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.lookup(inner.by_short_url.get(short_url)))
    }

    async fn find_by_created_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<UrlRecord>, StoreError> {
        ensure_range(start, end)?;

        let inner = self.inner.read().await;
        let mut records: Vec<UrlRecord> = inner
            .records
            .values()
            .filter(|r| r.created_within(start, end))
            .cloned()
            .collect();
        records.sort_by_key(|r| (r.created_at, r.id));

        Ok(records)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.records.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryRecordStore::new();

        let first = store.insert("https://a.io", "aaaa").await.unwrap();
        let second = store.insert("https://b.io", "bbbb").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_short_code_is_rejected() {
        let store = InMemoryRecordStore::new();
        store.insert("https://a.io", "same").await.unwrap();

        let err = store.insert("https://b.io", "same").await.unwrap_err();

        assert!(matches!(err, StoreError::DuplicateShortCode(code) if code == "same"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_original_url_is_rejected() {
        let store = InMemoryRecordStore::new();
        store.insert("https://a.io", "one").await.unwrap();

        let err = store.insert("https://a.io", "two").await.unwrap_err();

        assert!(matches!(err, StoreError::DuplicateOriginalUrl));
        assert!(store.find_by_short_url("two").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lookups() {
        let store = InMemoryRecordStore::new();
        let record = store.insert("https://rust-lang.org", "rust").await.unwrap();

        assert_eq!(store.find_by_id(record.id).await.unwrap(), Some(record.clone()));
        assert_eq!(
            store.find_by_short_url("rust").await.unwrap(),
            Some(record.clone())
        );
        assert_eq!(
            store
                .find_by_original_url("https://rust-lang.org")
                .await
                .unwrap(),
            Some(record)
        );
        assert!(store.find_by_id(99).await.unwrap().is_none());
        assert!(store.find_by_short_url("nope").await.unwrap().is_none());
        assert!(
            store
                .find_by_original_url("https://rust-lang.org/")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_created_range_is_closed_interval() {
        let store = InMemoryRecordStore::new();
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(1) - Duration::microseconds(1);

        store.insert_at("https://start.io", "s", start).await.unwrap();
        store.insert_at("https://end.io", "e", end).await.unwrap();
        store
            .insert_at("https://before.io", "b", start - Duration::microseconds(1))
            .await
            .unwrap();
        store
            .insert_at("https://after.io", "a", end + Duration::microseconds(1))
            .await
            .unwrap();

        let found = store.find_by_created_range(start, end).await.unwrap();
        let codes: Vec<&str> = found.iter().map(|r| r.short_url.as_str()).collect();

        assert_eq!(codes, vec!["s", "e"]);
    }

    #[tokio::test]
    async fn test_timestamps_are_truncated_to_microseconds() {
        let store = InMemoryRecordStore::new();
        let next_midnight = Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap();
        let start = next_midnight - Duration::days(1);
        let end = next_midnight - Duration::microseconds(1);

        let record = store
            .insert_at("https://late.io", "late", next_midnight - Duration::nanoseconds(500))
            .await
            .unwrap();

        assert_eq!(record.created_at, end);

        let found = store.find_by_created_range(start, end).await.unwrap();
        assert_eq!(found.len(), 1);

        let next_day = store
            .find_by_created_range(next_midnight, next_midnight + Duration::days(1))
            .await
            .unwrap();
        assert!(next_day.is_empty());
    }

    #[tokio::test]
    async fn test_inverted_range_is_an_error() {
        let store = InMemoryRecordStore::new();
        let now = Utc::now();

        let err = store
            .find_by_created_range(now, now - Duration::seconds(1))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::InvalidRange { .. }));
    }
}
