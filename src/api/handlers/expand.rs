//! Handler for short code expansion.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::debug;

use crate::api::dto::expand::ExpandResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its original URL.
///
/// # Endpoint
///
/// `GET /expand/{short_url}`
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is not valid UTF-8.
/// Returns 404 Not Found if the short code is unknown.
/// Returns 500 Internal Server Error on storage failures.
pub async fn expand_handler(
    State(state): State<AppState>,
    short_url: Result<Path<String>, PathRejection>,
) -> Result<Json<ExpandResponse>, AppError> {
    let Path(short_url) = short_url?;
    let record = state.url_service.expand(&short_url).await?;

    debug!(short_url = %short_url, "Expanded short URL");

    Ok(Json(ExpandResponse {
        original_url: record.original_url,
    }))
}
