//! Handlers for the `/chapters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::types::DbId;
use screenplay_core::validation::{require_non_blank, validate_dto};
use screenplay_db::models::chapter::{Chapter, CreateChapter, UpdateChapter};
use screenplay_db::repositories::ChapterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Chapter",
        id,
    })
}

/// POST /api/v1/chapters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChapter>,
) -> AppResult<(StatusCode, Json<Chapter>)> {
    validate_dto(&input)?;
    require_non_blank("title", input.title.as_deref())?;
    let chapter = ChapterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(chapter)))
}

/// GET /api/v1/projects/{id}/chapters
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Chapter>>> {
    let chapters = ChapterRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(chapters))
}

/// GET /api/v1/projects/{id}/chapters/number/{n}
pub async fn list_by_number(
    State(state): State<AppState>,
    Path((project_id, chapter_number)): Path<(DbId, i32)>,
) -> AppResult<Json<Vec<Chapter>>> {
    let chapters =
        ChapterRepo::list_by_project_and_number(&state.pool, project_id, chapter_number).await?;
    Ok(Json(chapters))
}

/// GET /api/v1/chapters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Chapter>> {
    let chapter = ChapterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(chapter))
}

/// PUT /api/v1/chapters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChapter>,
) -> AppResult<Json<Chapter>> {
    validate_dto(&input)?;
    require_non_blank("title", input.title.as_deref())?;
    let chapter = ChapterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(chapter))
}

/// DELETE /api/v1/chapters/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !ChapterRepo::hard_delete(&state.pool, id).await? {
        tracing::debug!(chapter_id = %id, "Delete of absent chapter ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}
