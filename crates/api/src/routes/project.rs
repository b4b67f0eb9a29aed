//! Route definitions for the `/projects` resource.
//!
//! Also exposes the project-scoped listings of the other resources.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{chapter, character, episode, generation, outline, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                      -> list
/// POST   /                                      -> create
/// GET    /{id}                                  -> get_by_id
/// PUT    /{id}                                  -> update
/// DELETE /{id}                                  -> delete
/// PATCH  /{id}/theme                            -> patch_theme
/// PATCH  /{id}/summary                          -> patch_summary
/// PATCH  /{id}/status                           -> patch_status
///
/// GET    /{id}/characters                       -> character::list_by_project
/// GET    /{id}/chapters                         -> chapter::list_by_project
/// GET    /{id}/chapters/number/{n}              -> chapter::list_by_number
/// GET    /{id}/chapters/{chapter_id}/episodes   -> episode::list_by_project_and_chapter
/// GET    /{id}/chapters/number/episodes         -> episode::list_by_project_and_number_chapter
/// GET    /{id}/episodes                         -> episode::list_by_project
/// GET    /{id}/outline                          -> outline::get_by_project
/// GET    /{id}/generation-logs                  -> generation::list_logs_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/theme", patch(project::patch_theme))
        .route("/{id}/summary", patch(project::patch_summary))
        .route("/{id}/status", patch(project::patch_status))
        .route("/{id}/characters", get(character::list_by_project))
        .route("/{id}/chapters", get(chapter::list_by_project))
        .route("/{id}/chapters/number/{n}", get(chapter::list_by_number))
        // Static segment wins over `{n}`, so a chapter id of `number` still resolves.
        .route(
            "/{id}/chapters/number/episodes",
            get(episode::list_by_project_and_number_chapter),
        )
        .route(
            "/{id}/chapters/{chapter_id}/episodes",
            get(episode::list_by_project_and_chapter),
        )
        .route("/{id}/episodes", get(episode::list_by_project))
        .route("/{id}/outline", get(outline::get_by_project))
        .route("/{id}/generation-logs", get(generation::list_logs_by_project))
}
