use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is constructed once in `main` and injected here;
/// nothing in the codebase reaches for a global client handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: capflow_db::DbPool,
    /// Server configuration (admin gate, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
