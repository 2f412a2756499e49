//! Handler for fetching a record by id.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::url::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original and short URL of a record.
///
/// # Endpoint
///
/// `GET /url/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is not valid UTF-8.
/// Returns 404 Not Found if no record has this id.
/// Returns 500 Internal Server Error if the id is malformed or storage fails.
pub async fn url_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Path(id) = id?;
    let record = state.url_service.get_by_id(&id).await?;
    Ok(Json(record.into()))
}
