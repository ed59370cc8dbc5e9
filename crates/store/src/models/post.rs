//! Post entity and DTOs.

use docket_core::time::deserialize_opt_timestamp;
use docket_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Violation};

/// A stored Post document.
///
/// Relations: has-many [`Comment`](super::comment::Comment) (inverse
/// reference `post_id` on the comment), has-one
/// [`Author`](super::author::Author) via `author_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: DocId,
    pub date: Option<Timestamp>,
    pub number: Option<i64>,
    pub string: String,
    pub author_id: Option<DocId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a Post (single or bulk).
///
/// All fields are optional at the serde level so that missing required
/// fields surface as structured violations from [`CreatePost::validate`]
/// rather than opaque deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    /// Accepts RFC 3339 strings or epoch milliseconds.
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub date: Option<Timestamp>,
    pub number: Option<i64>,
    pub string: Option<String>,
    pub author_id: Option<DocId>,
}

impl CreatePost {
    /// Check the candidate against the Post schema.
    ///
    /// Invariant: `string` must be present and non-empty on every stored
    /// Post.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "string", self.string.as_deref());
        violations
    }
}

/// DTO for partially updating a Post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub date: Option<Timestamp>,
    pub number: Option<i64>,
    pub string: Option<String>,
    pub author_id: Option<DocId>,
}

impl UpdatePost {
    /// Check the update against the Post schema. `string` may be omitted,
    /// but when supplied it must not be empty.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if let Some(s) = self.string.as_deref() {
            if s.trim().is_empty() {
                violations.push(Violation::new("string", "must not be empty"));
            }
        }
        violations
    }
}
