//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::types::DbId;
use screenplay_core::validation::{require_non_blank, validate_dto};
use screenplay_db::models::project::{
    CreateProject, PatchStatus, PatchSummary, PatchTheme, Project, UpdateProject,
};
use screenplay_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_dto(&input)?;
    require_non_blank("title", input.title.as_deref())?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_dto(&input)?;
    require_non_blank("title", input.title.as_deref())?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Succeeds whether or not the project existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !ProjectRepo::hard_delete(&state.pool, id).await? {
        tracing::debug!(project_id = %id, "Delete of absent project ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/projects/{id}/theme
pub async fn patch_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchTheme>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update_theme(&state.pool, id, input.theme.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PATCH /api/v1/projects/{id}/summary
pub async fn patch_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchSummary>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update_summary(&state.pool, id, input.summary.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PATCH /api/v1/projects/{id}/status
pub async fn patch_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchStatus>,
) -> AppResult<Json<Project>> {
    validate_dto(&input)?;
    let status = input.status.as_deref().map(str::trim).unwrap_or_default();
    require_non_blank("status", Some(status))?;
    let project = ProjectRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}
