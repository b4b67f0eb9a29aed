//! Route definitions for the `/chapters` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chapter, episode};
use crate::state::AppState;

/// Routes mounted at `/chapters`.
///
/// ```text
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/episodes   -> episode::list_by_chapter
/// ```
///
/// `{id}` in the episodes listing is matched as text, so outline chapter
/// ids work there as well as stored chapter ids.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(chapter::create))
        .route(
            "/{id}",
            get(chapter::get_by_id)
                .put(chapter::update)
                .delete(chapter::delete),
        )
        .route("/{id}/episodes", get(episode::list_by_chapter))
}
