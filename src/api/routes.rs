//! API route configuration.

use crate::api::handlers::{expand_handler, shorten_handler, url_handler, urls_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`              - Shorten a URL (idempotent per URL)
/// - `GET  /url/{id}`             - Fetch a record by id
/// - `GET  /urls?date=YYYY-MM-DD` - List records created on a day
/// - `GET  /expand/{short_url}`   - Resolve a short code
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/url/{id}", get(url_handler))
        .route("/urls", get(urls_handler))
        .route("/expand/{short_url}", get(expand_handler))
}
