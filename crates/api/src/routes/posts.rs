//! Route definitions for the Post collection.

use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::posts;
use crate::state::AppState;

/// Post routes mounted at `/posts`.
///
/// ```text
/// GET    /        -> list_posts
/// POST   /        -> create_post
/// POST   /bulk    -> bulk_create_posts (404 unless allow_bulk_post is set)
/// GET    /{id}    -> get_post
/// PUT    /{id}    -> update_post
/// DELETE /{id}    -> delete_post
/// ```
///
/// `/bulk` is always routed so the path never falls through to `/{id}`.
/// When the capability is disabled the handler answers 404 without reading
/// the body, so the rejection happens before any parsing or validation and
/// is distinguishable from a validation failure.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let bulk = if config.allow_bulk_post {
        post(posts::bulk_create_posts)
    } else {
        post(posts::bulk_post_not_exposed)
    };

    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/bulk", bulk)
        .route(
            "/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
}
