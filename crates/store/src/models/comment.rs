//! Comment entity and DTOs.

use docket_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Violation};

/// A stored Comment document. Belongs to one Post and one Author; the
/// store does not enforce referential integrity with either.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: DocId,
    pub comment: String,
    pub post_id: Option<DocId>,
    pub author_id: Option<DocId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a Comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub comment: Option<String>,
    pub post_id: Option<DocId>,
    pub author_id: Option<DocId>,
}

impl CreateComment {
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "comment", self.comment.as_deref());
        violations
    }
}
