use thiserror::Error;

/// Domain-level errors shared across crates.
///
/// The API crate maps these onto HTTP statuses; the store crate raises its
/// own `StoreError` and converts where a domain meaning exists.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: crate::types::DocId,
    },

    /// Input failed domain validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}
