//! DTOs for fetching a single record by id.

use serde::Serialize;

use crate::domain::entities::UrlRecord;

#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
