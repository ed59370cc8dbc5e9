use std::sync::Arc;

use docket_store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store is an
/// explicitly constructed instance with its own lifecycle, never ambient
/// global state.
#[derive(Clone)]
pub struct AppState {
    /// Document store backing all collections.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
