//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenOutcome;
use crate::error::AppError;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Only presence is checked.
    #[validate(
        required(message = "Original URL is required"),
        length(min = 1, message = "Original URL is required")
    )]
    pub original_url: Option<String>,
}

impl ShortenRequest {
    /// Validates the request and returns the URL to shorten.
    pub fn into_original_url(self) -> Result<String, AppError> {
        self.validate()?;
        Ok(self.original_url.unwrap_or_default())
    }
}

/// Response for a shorten call.
///
/// Untagged: a fresh record echoes the original URL, an existing one only
/// returns its short code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResponse {
    Created {
        original_url: String,
        short_url: String,
    },
    Existing {
        short_url: String,
    },
}

impl From<ShortenOutcome> for ShortenResponse {
    fn from(outcome: ShortenOutcome) -> Self {
        match outcome {
            ShortenOutcome::Created(record) => ShortenResponse::Created {
                original_url: record.original_url,
                short_url: record.short_url,
            },
            ShortenOutcome::Existing(record) => ShortenResponse::Existing {
                short_url: record.short_url,
            },
        }
    }
}
