use std::sync::Arc;

use screenplay_llm::CompletionGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: screenplay_db::DbPool,
    /// Prompt rendering and provider dispatch for `/ai/generate`.
    pub gateway: Arc<CompletionGateway>,
}
