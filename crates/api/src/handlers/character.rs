//! Handlers for the `/characters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::types::DbId;
use screenplay_core::validation::{require_non_blank, validate_dto};
use screenplay_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use screenplay_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Character",
        id,
    })
}

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_dto(&input)?;
    require_non_blank("name", input.name.as_deref())?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /api/v1/projects/{id}/characters
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// PUT /api/v1/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    validate_dto(&input)?;
    require_non_blank("name", input.name.as_deref())?;
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !CharacterRepo::hard_delete(&state.pool, id).await? {
        tracing::debug!(character_id = %id, "Delete of absent character ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}
