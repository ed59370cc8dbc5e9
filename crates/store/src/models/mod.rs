//! Entity models and request DTOs.
//!
//! Each entity module provides the stored document struct, create/update
//! DTOs, and an explicit `validate()` function returning a structured list
//! of [`Violation`]s. Validation never panics and is never driven by
//! exceptions: callers inspect the returned list and decide.

pub mod author;
pub mod comment;
pub mod post;

use serde::Serialize;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The offending field, or `"body"` when the element itself was
    /// malformed.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Require a text field to be present and non-empty (after trimming).
pub(crate) fn require_non_empty(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: Option<&str>,
) {
    match value {
        None => violations.push(Violation::new(field, "is required")),
        Some(s) if s.trim().is_empty() => {
            violations.push(Violation::new(field, "must not be empty"))
        }
        Some(_) => {}
    }
}
