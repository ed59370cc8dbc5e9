//! Request handlers for docket collections.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers run explicit schema validation, delegate persistence to
//! the [`DocumentStore`](docket_store::DocumentStore), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod authors;
pub mod comments;
pub mod posts;
