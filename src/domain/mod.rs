//! Domain layer containing the URL record entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or persistence layers;
//! concrete stores live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
