//! Explicit relation declarations and traversal (populate).
//!
//! Relations are data: each entity type declares its references in a static
//! table, and populate is a separate traversal step executed after the base
//! document is fetched. Nothing here runs implicitly on reads or writes.

use serde::Serialize;

use crate::error::StoreResult;
use crate::models::author::Author;
use crate::models::comment::Comment;
use crate::models::post::Post;
use crate::traits::DocumentStore;

/// How a declared relation is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Many related documents hold a foreign key back to this document.
    HasMany { foreign_key: &'static str },
    /// This document holds a key referencing one related document.
    HasOne { local_key: &'static str },
}

/// A declared relation between two collections.
#[derive(Debug, Clone, Copy)]
pub struct RelationDef {
    /// Field name on the populated representation.
    pub name: &'static str,
    /// Target collection.
    pub target: &'static str,
    pub kind: RelationKind,
}

/// Relations declared on the Post entity.
pub const POST_RELATIONS: &[RelationDef] = &[
    RelationDef {
        name: "comments",
        target: "comments",
        kind: RelationKind::HasMany {
            foreign_key: "post_id",
        },
    },
    RelationDef {
        name: "author",
        target: "authors",
        kind: RelationKind::HasOne {
            local_key: "author_id",
        },
    },
];

/// A Post with its declared relations resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedPost {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
    pub author: Option<Author>,
}

/// Resolve the declared relations of a post against the store.
///
/// Walks [`POST_RELATIONS`] and issues one lookup per declaration. Missing
/// referents resolve to empty/`None` rather than errors: referential
/// integrity is not enforced at write time, so dangling keys are expected.
pub async fn populate_post(store: &dyn DocumentStore, post: Post) -> StoreResult<PopulatedPost> {
    let mut comments = Vec::new();
    let mut author = None;

    for relation in POST_RELATIONS {
        match relation.kind {
            RelationKind::HasMany { .. } => {
                comments = store.list_comments_for_post(post.id).await?;
            }
            RelationKind::HasOne { .. } => {
                if let Some(author_id) = post.author_id {
                    author = store.get_author(author_id).await?;
                }
            }
        }
    }

    Ok(PopulatedPost {
        post,
        comments,
        author,
    })
}
