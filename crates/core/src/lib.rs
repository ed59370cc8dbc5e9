//! Shared domain types for the docket service.
//!
//! Kept free of HTTP and storage concerns so both the store and the API
//! crates can depend on it.

pub mod error;
pub mod time;
pub mod types;
