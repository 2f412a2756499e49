//! Infrastructure layer for external integrations.
//!
//! Implements the storage trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory record stores

pub mod persistence;
