//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted mapping between an original URL and its short code
//!
//! Records are created once and never mutated, so there is no separate
//! "new" or "patch" type: the store receives the two caller-provided fields
//! and assigns the rest.

pub mod url_record;

pub use url_record::UrlRecord;
