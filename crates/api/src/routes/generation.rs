//! Route definitions for text generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST   /generate/{kind}   -> generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate/{kind}", post(generation::generate))
}
