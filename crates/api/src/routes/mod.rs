pub mod authors;
pub mod comments;
pub mod health;
pub mod posts;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts                GET list, POST create
/// /posts/bulk           POST bulk create (404 unless enabled)
/// /posts/{id}           GET (?populate=true), PUT, DELETE
///
/// /comments             GET list, POST create
/// /comments/{id}        GET
///
/// /authors              GET list, POST create
/// /authors/{id}         GET
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/posts", posts::router(config))
        .nest("/comments", comments::router())
        .nest("/authors", authors::router())
}
