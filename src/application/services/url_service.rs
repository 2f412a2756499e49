//! URL shortening, lookup and daily listing service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{RecordStore, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::date_range::local_day_bounds;

/// Result of a shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new record was stored.
    Created(UrlRecord),
    /// The original URL was already shortened; nothing was stored.
    Existing(UrlRecord),
}

impl ShortenOutcome {
    pub fn record(&self) -> &UrlRecord {
        match self {
            ShortenOutcome::Created(record) | ShortenOutcome::Existing(record) => record,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating and retrieving shortened URLs.
///
/// Creation is idempotent per original URL. Store failures are never
/// retried and surface as [`AppError::Internal`].
pub struct UrlService {
    store: Arc<dyn RecordStore>,
}

impl UrlService {
    /// Creates a new service on top of a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Shortens `original_url`, or returns the existing record for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty.
    /// Returns [`AppError::Internal`] on any store failure, including a
    /// short code collision.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome, AppError> {
        validate_original_url(original_url)?;

        if let Some(existing) = self.store.find_by_original_url(original_url).await? {
            debug!(short_url = %existing.short_url, "URL already shortened");
            return Ok(ShortenOutcome::Existing(existing));
        }

        let short_url = generate_code();

        match self.store.insert(original_url, &short_url).await {
            Ok(record) => {
                info!(id = record.id, short_url = %record.short_url, "Short URL created");
                Ok(ShortenOutcome::Created(record))
            }
            Err(StoreError::DuplicateOriginalUrl) => {
                warn!("Concurrent shorten for the same URL, returning the stored record");
                self.store
                    .find_by_original_url(original_url)
                    .await?
                    .map(ShortenOutcome::Existing)
                    .ok_or_else(|| {
                        AppError::internal(
                            "Failed to shorten URL",
                            json!({ "reason": "conflicting record vanished" }),
                        )
                    })
            }
            Err(err) => Err(AppError::internal(
                "Failed to shorten URL",
                json!({ "reason": err.to_string() }),
            )),
        }
    }

    /// Retrieves a record by its id as received on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] if `id` is not a valid identifier or
    /// the store fails.
    pub async fn get_by_id(&self, id: &str) -> Result<UrlRecord, AppError> {
        let parsed: i64 = id.parse().map_err(|_| {
            AppError::internal("Failed to fetch URL", json!({ "reason": "malformed id", "id": id }))
        })?;

        self.store
            .find_by_id(parsed)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": parsed })))
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short code is unknown.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn expand(&self, short_url: &str) -> Result<UrlRecord, AppError> {
        self.store
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "short_url": short_url })))
    }

    /// Lists every record created on `date` (`YYYY-MM-DD`, server local time).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the date cannot be parsed or the
    /// store fails.
    pub async fn list_created_on(&self, date: &str) -> Result<Vec<UrlRecord>, AppError> {
        let (start, end) = local_day_bounds(date).map_err(|e| {
            AppError::internal("Failed to fetch URLs", json!({ "reason": e.to_string() }))
        })?;

        debug!(%start, %end, "Listing URLs by creation date");

        Ok(self.store.find_by_created_range(start, end).await?)
    }

    /// Returns the total number of stored records.
    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.count().await?)
    }

    /// Probes the record store.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        Ok(self.store.ping().await?)
    }
}

/// Checks that an original URL is present.
///
/// No format validation is performed.
pub fn validate_original_url(original_url: &str) -> Result<(), AppError> {
    if original_url.is_empty() {
        return Err(AppError::bad_request(
            "Original URL is required",
            json!({ "field": "original_url" }),
        ));
    }
    Ok(())
}
