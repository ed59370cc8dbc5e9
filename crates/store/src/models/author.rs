//! Author entity and DTOs.

use docket_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Violation};

/// A stored Author document.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: DocId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an Author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: Option<String>,
}

impl CreateAuthor {
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "name", self.name.as_deref());
        violations
    }
}
