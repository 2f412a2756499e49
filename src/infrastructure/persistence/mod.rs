//! Record store implementations.
//!
//! - [`PgRecordStore`] - PostgreSQL storage via SQLx
//! - [`InMemoryRecordStore`] - Process-local storage for development and tests
//! - [`pool`] - Connection pool and migration helpers

pub mod memory_record_store;
pub mod pg_record_store;
pub mod pool;

pub use memory_record_store::InMemoryRecordStore;
pub use pg_record_store::PgRecordStore;
