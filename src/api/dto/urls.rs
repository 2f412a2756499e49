//! DTOs for the daily listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use serde_json::json;

/// Query parameters for `GET /urls`.
#[derive(Debug, Deserialize)]
pub struct UrlsQuery {
    /// Calendar day in `YYYY-MM-DD` form.
    pub date: Option<String>,
}

impl UrlsQuery {
    /// Returns the requested date, rejecting an absent or empty value.
    ///
    /// Only presence is checked here; an unparseable date is a lookup
    /// failure reported by the service.
    pub fn require_date(&self) -> Result<&str, AppError> {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => Ok(date),
            _ => Err(AppError::bad_request(
                "Date is required in YYYY-MM-DD format",
                json!({ "field": "date" }),
            )),
        }
    }
}

/// A stored record as listed by `GET /urls`.
#[derive(Debug, Serialize)]
pub struct UrlRecordItem {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordItem {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_url: record.short_url,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlRecordItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_date() {
        let query = UrlsQuery {
            date: Some("2025-01-31".to_string()),
        };
        assert_eq!(query.require_date().unwrap(), "2025-01-31");
    }

    #[test]
    fn test_absent_or_empty_date_is_rejected() {
        assert!(UrlsQuery { date: None }.require_date().is_err());
        assert!(
            UrlsQuery {
                date: Some(String::new())
            }
            .require_date()
            .is_err()
        );
    }

    #[test]
    fn test_unparseable_date_passes_presence_check() {
        let query = UrlsQuery {
            date: Some("garbage".to_string()),
        };
        assert!(query.require_date().is_ok());
    }
}
