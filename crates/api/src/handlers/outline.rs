//! Handlers for the `/outlines` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::outline::{count_mismatches, layout_mismatch, StructureType};
use screenplay_core::types::DbId;
use screenplay_core::validation::validate_dto;
use screenplay_db::models::outline::{
    CreateOutline, Outline, PatchSections, PatchStructureType, UpdateOutline,
};
use screenplay_db::repositories::OutlineRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Outline",
        id,
    })
}

/// Log, but accept, section trees whose declared counts disagree with their children.
fn warn_on_drift(outline: &Outline) {
    let mismatches = count_mismatches(&outline.sections);
    if !mismatches.is_empty() {
        tracing::debug!(
            outline_id = %outline.id,
            mismatches = mismatches.len(),
            first = %mismatches[0].path,
            "Outline counts disagree with contents"
        );
    }
    let layout = outline
        .structure_type
        .parse::<StructureType>()
        .ok()
        .and_then(|st| layout_mismatch(st, &outline.sections));
    if let Some(m) = layout {
        tracing::debug!(
            outline_id = %outline.id,
            expected = m.declared,
            actual = m.actual,
            "Outline section count does not match its structure type"
        );
    }
}

/// POST /api/v1/outlines
///
/// Returns 409 if the project already has an outline.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOutline>,
) -> AppResult<(StatusCode, Json<Outline>)> {
    validate_dto(&input)?;
    let outline = OutlineRepo::create(&state.pool, &input).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Project {} already has an outline",
            input.project_id.map(|id| id.to_string()).unwrap_or_default()
        )))
    })?;
    warn_on_drift(&outline);
    Ok((StatusCode::CREATED, Json(outline)))
}

/// GET /api/v1/outlines
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Outline>>> {
    let outlines = OutlineRepo::list(&state.pool).await?;
    Ok(Json(outlines))
}

/// GET /api/v1/projects/{id}/outline
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Outline>> {
    let outline = OutlineRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outline for project",
            id: project_id,
        }))?;
    Ok(Json(outline))
}

/// GET /api/v1/outlines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Outline>> {
    let outline = OutlineRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(outline))
}

/// PUT /api/v1/outlines/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOutline>,
) -> AppResult<Json<Outline>> {
    validate_dto(&input)?;
    let outline = OutlineRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    warn_on_drift(&outline);
    Ok(Json(outline))
}

/// PATCH /api/v1/outlines/{id}/structure-type
pub async fn patch_structure_type(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchStructureType>,
) -> AppResult<Json<Outline>> {
    let structure_type = input.structure_type.ok_or_else(|| {
        AppError::Core(CoreError::Validation("structureType is required".to_string()))
    })?;
    let outline = OutlineRepo::update_structure_type(&state.pool, id, structure_type)
        .await?
        .ok_or_else(|| not_found(id))?;
    warn_on_drift(&outline);
    Ok(Json(outline))
}

/// PATCH /api/v1/outlines/{id}/sections
pub async fn patch_sections(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchSections>,
) -> AppResult<Json<Outline>> {
    let outline = OutlineRepo::update_sections(&state.pool, id, &input.sections)
        .await?
        .ok_or_else(|| not_found(id))?;
    warn_on_drift(&outline);
    Ok(Json(outline))
}

/// DELETE /api/v1/outlines/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !OutlineRepo::hard_delete(&state.pool, id).await? {
        tracing::debug!(outline_id = %id, "Delete of absent outline ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}
