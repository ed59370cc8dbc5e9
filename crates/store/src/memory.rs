//! In-memory document store.
//!
//! The default backend for tests and single-process deployments. Each
//! collection is a `RwLock<BTreeMap<DocId, T>>` with an id counter kept
//! inside the lock, so batch inserts assign contiguous identifiers and are
//! atomic with respect to concurrent requests.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use docket_core::types::DocId;

use crate::error::{StoreError, StoreResult};
use crate::models::author::{Author, CreateAuthor};
use crate::models::comment::{Comment, CreateComment};
use crate::models::post::{CreatePost, Post, UpdatePost};
use crate::traits::DocumentStore;

/// A single in-memory collection.
///
/// `BTreeMap` keeps documents ordered by id, which equals insertion order
/// because ids are assigned monotonically under the write lock.
#[derive(Debug)]
struct Collection<T> {
    inner: RwLock<CollectionInner<T>>,
}

#[derive(Debug)]
struct CollectionInner<T> {
    docs: BTreeMap<DocId, T>,
    next_id: DocId,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            inner: RwLock::new(CollectionInner {
                docs: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CollectionInner<T>> {
        // Lock poisoning only happens if a writer panicked; propagating the
        // poisoned data is still sound for plain document maps.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CollectionInner<T>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn get(&self, id: DocId) -> Option<T> {
        self.read().docs.get(&id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.read().docs.values().cloned().collect()
    }

    /// Insert one document built from its assigned id.
    fn insert_with(&self, build: impl FnOnce(DocId) -> T) -> T {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let doc = build(id);
        inner.docs.insert(id, doc.clone());
        doc
    }

    /// Insert a batch under a single write lock. Ids are contiguous and
    /// the batch is atomic with respect to concurrent readers and writers.
    fn insert_many_with<B>(&self, builders: Vec<B>, build: impl Fn(DocId, B) -> T) -> Vec<T> {
        let mut inner = self.write();
        let mut created = Vec::with_capacity(builders.len());
        for builder in builders {
            let id = inner.next_id;
            inner.next_id += 1;
            let doc = build(id, builder);
            inner.docs.insert(id, doc.clone());
            created.push(doc);
        }
        created
    }

    fn remove(&self, id: DocId) -> bool {
        self.write().docs.remove(&id).is_some()
    }

    fn update_with(&self, id: DocId, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut inner = self.write();
        let doc = inner.docs.get_mut(&id)?;
        apply(doc);
        Some(doc.clone())
    }
}

/// In-memory implementation of [`DocumentStore`].
#[derive(Debug)]
pub struct MemoryStore {
    posts: Collection<Post>,
    comments: Collection<Comment>,
    authors: Collection<Author>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            posts: Collection::new(),
            comments: Collection::new(),
            authors: Collection::new(),
        }
    }

    /// Create an empty store wrapped in `Arc`.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the required `string` field or fail with the store's own
/// integrity error. Handlers validate first; this is the backstop.
fn required_string(
    collection: &'static str,
    field: &str,
    value: Option<&str>,
) -> StoreResult<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(StoreError::InvalidDocument {
            collection,
            reason: format!("{field} is required and must not be empty"),
        }),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert_post(&self, body: &CreatePost) -> StoreResult<Post> {
        let string = required_string("posts", "string", body.string.as_deref())?;
        let now = Utc::now();
        Ok(self.posts.insert_with(|id| Post {
            id,
            date: body.date,
            number: body.number,
            string,
            author_id: body.author_id,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn insert_posts(&self, bodies: &[CreatePost]) -> StoreResult<Vec<Post>> {
        // Reject the whole batch before touching the collection, so a bad
        // element never leaves partial state behind.
        let mut strings = Vec::with_capacity(bodies.len());
        for body in bodies {
            strings.push(required_string("posts", "string", body.string.as_deref())?);
        }

        let now = Utc::now();
        let builders: Vec<_> = bodies.iter().zip(strings).collect();
        let created = self.posts.insert_many_with(builders, |id, (body, string)| Post {
            id,
            date: body.date,
            number: body.number,
            string,
            author_id: body.author_id,
            created_at: now,
            updated_at: now,
        });

        tracing::debug!(count = created.len(), "Batch inserted into posts");
        Ok(created)
    }

    async fn get_post(&self, id: DocId) -> StoreResult<Option<Post>> {
        Ok(self.posts.get(id))
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.list())
    }

    async fn update_post(&self, id: DocId, body: &UpdatePost) -> StoreResult<Option<Post>> {
        if let Some(s) = body.string.as_deref() {
            required_string("posts", "string", Some(s))?;
        }
        let now = Utc::now();
        Ok(self.posts.update_with(id, |post| {
            if let Some(date) = body.date {
                post.date = Some(date);
            }
            if let Some(number) = body.number {
                post.number = Some(number);
            }
            if let Some(string) = &body.string {
                post.string = string.clone();
            }
            if let Some(author_id) = body.author_id {
                post.author_id = Some(author_id);
            }
            post.updated_at = now;
        }))
    }

    async fn delete_post(&self, id: DocId) -> StoreResult<bool> {
        Ok(self.posts.remove(id))
    }

    async fn insert_comment(&self, body: &CreateComment) -> StoreResult<Comment> {
        let comment = required_string("comments", "comment", body.comment.as_deref())?;
        let now = Utc::now();
        Ok(self.comments.insert_with(|id| Comment {
            id,
            comment,
            post_id: body.post_id,
            author_id: body.author_id,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get_comment(&self, id: DocId) -> StoreResult<Option<Comment>> {
        Ok(self.comments.get(id))
    }

    async fn list_comments(&self) -> StoreResult<Vec<Comment>> {
        Ok(self.comments.list())
    }

    async fn list_comments_for_post(&self, post_id: DocId) -> StoreResult<Vec<Comment>> {
        Ok(self
            .comments
            .list()
            .into_iter()
            .filter(|c| c.post_id == Some(post_id))
            .collect())
    }

    async fn insert_author(&self, body: &CreateAuthor) -> StoreResult<Author> {
        let name = required_string("authors", "name", body.name.as_deref())?;
        let now = Utc::now();
        Ok(self.authors.insert_with(|id| Author {
            id,
            name,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get_author(&self, id: DocId) -> StoreResult<Option<Author>> {
        Ok(self.authors.get(id))
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        Ok(self.authors.list())
    }
}
