//! DocumentStore trait definition.

use async_trait::async_trait;
use docket_core::types::DocId;

use crate::error::StoreResult;
use crate::models::author::{Author, CreateAuthor};
use crate::models::comment::{Comment, CreateComment};
use crate::models::post::{CreatePost, Post, UpdatePost};

/// Abstract storage interface for docket collections.
///
/// Implementations must be thread-safe (`Send + Sync`) and support async
/// operations. Callers are expected to run schema validation before
/// inserting; implementations may still reject documents that violate
/// storage invariants.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // Post collection

    /// Insert a single post, returning the stored document with its
    /// assigned identifier.
    async fn insert_post(&self, body: &CreatePost) -> StoreResult<Post>;

    /// Insert a batch of posts atomically, in input order.
    ///
    /// Either every document is persisted or none is. The returned vector
    /// preserves input order and each document carries a fresh identifier.
    async fn insert_posts(&self, bodies: &[CreatePost]) -> StoreResult<Vec<Post>>;

    /// Fetch a post by ID.
    async fn get_post(&self, id: DocId) -> StoreResult<Option<Post>>;

    /// List all posts in insertion order.
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// Apply a partial update. Returns `None` if the post does not exist.
    async fn update_post(&self, id: DocId, body: &UpdatePost) -> StoreResult<Option<Post>>;

    /// Delete a post. Returns whether a document was removed.
    async fn delete_post(&self, id: DocId) -> StoreResult<bool>;

    // Comment collection

    async fn insert_comment(&self, body: &CreateComment) -> StoreResult<Comment>;

    async fn get_comment(&self, id: DocId) -> StoreResult<Option<Comment>>;

    async fn list_comments(&self) -> StoreResult<Vec<Comment>>;

    /// List comments whose `post_id` references the given post, in
    /// insertion order. Used by relation traversal.
    async fn list_comments_for_post(&self, post_id: DocId) -> StoreResult<Vec<Comment>>;

    // Author collection

    async fn insert_author(&self, body: &CreateAuthor) -> StoreResult<Author>;

    async fn get_author(&self, id: DocId) -> StoreResult<Option<Author>>;

    async fn list_authors(&self) -> StoreResult<Vec<Author>>;
}
