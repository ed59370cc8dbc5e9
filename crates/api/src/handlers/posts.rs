//! Handlers for the Post collection, including the bulk-create operation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use docket_core::error::CoreError;
use docket_core::types::DocId;
use docket_store::models::post::{CreatePost, UpdatePost};
use docket_store::models::Violation;
use docket_store::relations;
use serde::Deserialize;

use crate::error::{AppError, AppResult, InvalidElement};
use crate::state::AppState;

/// Query parameters for `GET /api/posts/{id}`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GetPostParams {
    /// When true, resolve declared relations (comments, author).
    #[serde(default)]
    pub populate: bool,
}

/// GET /api/posts
///
/// List all posts in insertion order.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = state.store.list_posts().await?;

    Ok(Json(posts))
}

/// POST /api/posts
///
/// Create a single post. Returns 201 with the stored document, or 400 with
/// the violation list if the candidate fails schema validation.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    let violations = input.validate();
    if !violations.is_empty() {
        return Err(AppError::Invalid(violations));
    }

    let post = state.store.insert_post(&input).await?;

    tracing::info!(post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// POST /api/posts/bulk
///
/// Bulk create: the body is a JSON array of candidate posts. Elements are
/// deserialized and validated individually so the response can name each
/// invalid element; any violation rejects the whole batch and nothing is
/// persisted. On success every document is inserted atomically, in input
/// order, and returned with its assigned identifier.
///
/// This handler is only routed when the bulk-create capability is enabled;
/// otherwise `/bulk` answers 404 (see [`crate::routes::posts::router`]).
pub async fn bulk_create_posts(
    State(state): State<AppState>,
    Json(elements): Json<Vec<serde_json::Value>>,
) -> AppResult<impl IntoResponse> {
    let mut bodies = Vec::with_capacity(elements.len());
    let mut invalid = Vec::new();

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<CreatePost>(element) {
            Ok(body) => {
                let violations = body.validate();
                if violations.is_empty() {
                    bodies.push(body);
                } else {
                    invalid.push(InvalidElement { index, violations });
                }
            }
            Err(err) => invalid.push(InvalidElement {
                index,
                violations: vec![Violation::new("body", err.to_string())],
            }),
        }
    }

    if !invalid.is_empty() {
        tracing::info!(invalid = invalid.len(), "Bulk post rejected");
        return Err(AppError::InvalidBatch(invalid));
    }

    let created = state.store.insert_posts(&bodies).await?;

    tracing::info!(count = created.len(), "Bulk posts created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/posts/bulk when the capability is disabled.
///
/// The operation is not exposed: answer 404 without an extractor, so the
/// request body is never read, let alone validated.
pub async fn bulk_post_not_exposed() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// GET /api/posts/{id}
///
/// Fetch one post. With `?populate=true`, declared relations are resolved
/// in an explicit traversal step after the base document is fetched.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    Query(params): Query<GetPostParams>,
) -> AppResult<impl IntoResponse> {
    let post = state
        .store
        .get_post(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id,
        }))?;

    if params.populate {
        let populated = relations::populate_post(state.store.as_ref(), post).await?;
        return Ok(Json(populated).into_response());
    }

    Ok(Json(post).into_response())
}

/// PUT /api/posts/{id}
///
/// Partial update; absent fields are left unchanged.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    let violations = input.validate();
    if !violations.is_empty() {
        return Err(AppError::Invalid(violations));
    }

    let post = state
        .store
        .update_post(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id,
        }))?;

    tracing::info!(post_id = id, "Post updated");

    Ok(Json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete_post(id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id,
        }));
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
