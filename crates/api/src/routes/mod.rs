pub mod chapter;
pub mod character;
pub mod episode;
pub mod generation;
pub mod health;
pub mod outline;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                      projects plus project-scoped listings
/// /characters                    characters
/// /chapters                      chapters
/// /episodes                      episodes (incl. batch delete)
/// /outlines                      outlines
/// /ai                            text generation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/characters", character::router())
        .nest("/chapters", chapter::router())
        .nest("/episodes", episode::router())
        .nest("/outlines", outline::router())
        .nest("/ai", generation::router())
}
