//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document failed the store's own integrity checks. Callers are
    /// expected to validate before inserting; this is the backstop.
    #[error("invalid document for {collection}: {reason}")]
    InvalidDocument {
        collection: &'static str,
        reason: String,
    },

    /// The backing store is unreachable or refused the operation.
    #[error("storage connection error: {message}")]
    Connection { message: String },
}

/// Convenience alias for storage results.
pub type StoreResult<T> = Result<T, StoreError>;
