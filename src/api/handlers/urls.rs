//! Handler for the daily listing endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::urls::{UrlListResponse, UrlsQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every URL shortened on a given calendar day.
///
/// # Endpoint
///
/// `GET /urls?date=YYYY-MM-DD`
///
/// The day is interpreted in the server's local time zone.
///
/// # Response
///
/// ```json
/// {
///   "urls": [
///     {
///       "id": 1,
///       "original_url": "https://example.com",
///       "short_url": "Xk2mP9qLw4",
///       "created_at": "2025-03-10T09:15:00Z"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `date` is missing or the query string is malformed.
/// Returns 500 Internal Server Error if `date` cannot be parsed or storage fails.
pub async fn urls_handler(
    State(state): State<AppState>,
    query: Result<Query<UrlsQuery>, QueryRejection>,
) -> Result<Json<UrlListResponse>, AppError> {
    let Query(query) = query?;
    let date = query.require_date()?;

    let records = state.url_service.list_created_on(date).await?;

    Ok(Json(UrlListResponse {
        urls: records.into_iter().map(Into::into).collect(),
    }))
}
