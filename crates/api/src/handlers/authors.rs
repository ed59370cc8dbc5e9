//! Handlers for the Author collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use docket_core::error::CoreError;
use docket_core::types::DocId;
use docket_store::models::author::CreateAuthor;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/authors
pub async fn list_authors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let authors = state.store.list_authors().await?;

    Ok(Json(authors))
}

/// POST /api/authors
pub async fn create_author(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    let violations = input.validate();
    if !violations.is_empty() {
        return Err(AppError::Invalid(violations));
    }

    let author = state.store.insert_author(&input).await?;

    tracing::info!(author_id = author.id, "Author created");

    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /api/authors/{id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let author = state
        .store
        .get_author(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;

    Ok(Json(author))
}
