//! Route definitions for the `/outlines` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::outline;
use crate::state::AppState;

/// Routes mounted at `/outlines`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// PATCH  /{id}/structure-type    -> patch_structure_type
/// PATCH  /{id}/sections          -> patch_sections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(outline::list).post(outline::create))
        .route(
            "/{id}",
            get(outline::get_by_id)
                .put(outline::update)
                .delete(outline::delete),
        )
        .route("/{id}/structure-type", patch(outline::patch_structure_type))
        .route("/{id}/sections", patch(outline::patch_sections))
}
