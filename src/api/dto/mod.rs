//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod expand;
pub mod health;
pub mod shorten;
pub mod url;
pub mod urls;
