//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::RecordStore`] trait and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, lookups and daily listing
pub mod services;
