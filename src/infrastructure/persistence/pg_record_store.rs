//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::record_store::ensure_range;
use crate::domain::repositories::{RecordStore, StoreError};

const SHORT_URL_CONSTRAINT: &str = "urls_short_url_key";
const ORIGINAL_URL_CONSTRAINT: &str = "urls_original_url_md5_key";

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.original_url, row.short_url, row.created_at)
    }
}

/// PostgreSQL repository for URL records.
///
/// Uniqueness of `short_url` and of the original URL is enforced by the
/// schema in `migrations/`; violations are mapped to typed [`StoreError`]s.
pub struct PgRecordStore {
    pool: Arc<PgPool>,
}

impl PgRecordStore {
    /// Creates a new store on top of a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Classifies unique violations by the constraint that fired.
fn map_insert_error(err: sqlx::Error, short_url: &str) -> StoreError {
    if let Some(db_err) = err.as_database_error()
        && db_err.is_unique_violation()
    {
        match db_err.constraint() {
            Some(SHORT_URL_CONSTRAINT) => {
                return StoreError::DuplicateShortCode(short_url.to_string());
            }
            Some(ORIGINAL_URL_CONSTRAINT) => return StoreError::DuplicateOriginalUrl,
            _ => {}
        }
    }

    StoreError::Database(err)
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE md5(original_url) = md5($1) AND original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert(&self, original_url: &str, short_url: &str) -> Result<UrlRecord, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, created_at
            "#,
        )
        .bind(original_url)
        .bind(short_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_insert_error(e, short_url))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, short_url, created_at FROM urls WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, short_url, created_at FROM urls WHERE short_url = $1",
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_created_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<UrlRecord>, StoreError> {
        ensure_range(start, end)?;

        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE created_at >= $1 AND created_at <= $2
            ORDER BY created_at, id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
