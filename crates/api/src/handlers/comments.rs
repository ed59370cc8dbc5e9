//! Handlers for the Comment collection.
//!
//! Comments are created independently; referential integrity with Post and
//! Author is not enforced at write time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use docket_core::error::CoreError;
use docket_core::types::DocId;
use docket_store::models::comment::CreateComment;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/comments
pub async fn list_comments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let comments = state.store.list_comments().await?;

    Ok(Json(comments))
}

/// POST /api/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let violations = input.validate();
    if !violations.is_empty() {
        return Err(AppError::Invalid(violations));
    }

    let comment = state.store.insert_comment(&input).await?;

    tracing::info!(comment_id = comment.id, post_id = ?comment.post_id, "Comment created");

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let comment = state
        .store
        .get_comment(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    Ok(Json(comment))
}
