//! Route definitions for the `/episodes` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// DELETE /batch             -> batch_delete
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PATCH  /{id}/title        -> patch_title
/// PATCH  /{id}/content      -> patch_content
/// PATCH  /{id}/word-count   -> patch_word_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list).post(episode::create))
        .route("/batch", delete(episode::batch_delete))
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
        .route("/{id}/title", patch(episode::patch_title))
        .route("/{id}/content", patch(episode::patch_content))
        .route("/{id}/word-count", patch(episode::patch_word_count))
}
