//! Document storage for the docket service.
//!
//! Exposes the [`DocumentStore`] trait as the storage seam, entity models
//! with explicit validation, an in-memory backend, and explicit relation
//! traversal (populate). A networked document database backend would
//! implement the same trait.

pub mod error;
pub mod memory;
pub mod models;
pub mod relations;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::DocumentStore;
