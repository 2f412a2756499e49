//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL, or returns the existing one for the same original URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Response
///
/// New record:
///
/// ```json
/// { "original_url": "https://example.com", "short_url": "Xk2mP9qLw4" }
/// ```
///
/// Already shortened:
///
/// ```json
/// { "short_url": "Xk2mP9qLw4" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `original_url` is missing or empty, or the
/// body is not JSON.
/// Returns 500 Internal Server Error on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload?;
    let original_url = request.into_original_url()?;

    let outcome = state.url_service.shorten(&original_url).await?;

    Ok(Json(outcome.into()))
}
