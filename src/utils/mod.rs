//! Utility functions shared by the service and the admin CLI.
//!
//! - [`code_generator`] - Random short code generation
//! - [`date_range`] - Calendar-day bounds for the daily listing

pub mod code_generator;
pub mod date_range;
