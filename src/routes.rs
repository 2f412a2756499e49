//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`              - Shorten a URL
//! - `GET  /url/{id}`             - Fetch a record by id
//! - `GET  /urls?date=YYYY-MM-DD` - Daily listing
//! - `GET  /expand/{short_url}`   - Resolve a short code
//! - `GET  /health`               - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, state and tracing applied.
///
/// Integration tests drive this router directly.
pub fn api_router(state: AppState) -> Router {
    api::routes::routes()
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(api::middleware::tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Wraps [`api_router`] so `/url/1/` and `/url/1` resolve identically.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
