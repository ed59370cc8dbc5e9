//! Route definitions for the Author collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Author routes mounted at `/authors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(authors::list_authors).post(authors::create_author))
        .route("/{id}", get(authors::get_author))
}
