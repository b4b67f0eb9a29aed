//! Handlers for the `/episodes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::types::DbId;
use screenplay_core::validation::{parse_batch_ids, require_non_blank, validate_dto};
use screenplay_db::models::episode::{
    CreateEpisode, Episode, PatchEpisodeContent, PatchEpisodeTitle, PatchWordCount, UpdateEpisode,
};
use screenplay_db::repositories::EpisodeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Episode",
        id,
    })
}

/// POST /api/v1/episodes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    validate_dto(&input)?;
    require_non_blank("chapterId", input.chapter_id.as_deref())?;
    require_non_blank("episodeTitle", input.episode_title.as_deref())?;
    let episode = EpisodeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /api/v1/episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/projects/{id}/episodes
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/projects/{id}/chapters/{chapter_id}/episodes
pub async fn list_by_project_and_chapter(
    State(state): State<AppState>,
    Path((project_id, chapter_id)): Path<(DbId, String)>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes =
        EpisodeRepo::list_by_project_and_chapter(&state.pool, project_id, &chapter_id).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/projects/{id}/chapters/number/episodes
///
/// Chapter ids are free text. This static route keeps a chapter whose id is
/// literally `number` reachable, since `/chapters/number/{n}` would otherwise
/// capture the request.
pub async fn list_by_project_and_number_chapter(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes =
        EpisodeRepo::list_by_project_and_chapter(&state.pool, project_id, "number").await?;
    Ok(Json(episodes))
}

/// GET /api/v1/chapters/{id}/episodes
pub async fn list_by_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list_by_chapter(&state.pool, &chapter_id).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(episode))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisode>,
) -> AppResult<Json<Episode>> {
    validate_dto(&input)?;
    require_non_blank("episodeTitle", input.episode_title.as_deref())?;
    let episode = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(episode))
}

/// PATCH /api/v1/episodes/{id}/title
pub async fn patch_title(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchEpisodeTitle>,
) -> AppResult<Json<Episode>> {
    validate_dto(&input)?;
    let title = input.episode_title.as_deref().unwrap_or_default();
    require_non_blank("episodeTitle", Some(title))?;
    let episode = EpisodeRepo::update_title(&state.pool, id, title)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(episode))
}

/// PATCH /api/v1/episodes/{id}/content
pub async fn patch_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchEpisodeContent>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::update_content(&state.pool, id, input.episode_content.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(episode))
}

/// PATCH /api/v1/episodes/{id}/word-count
pub async fn patch_word_count(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchWordCount>,
) -> AppResult<Json<Episode>> {
    validate_dto(&input)?;
    let count = input.word_count.unwrap_or_default();
    let episode = EpisodeRepo::update_word_count(&state.pool, id, count)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(episode))
}

/// DELETE /api/v1/episodes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !EpisodeRepo::hard_delete(&state.pool, id).await? {
        tracing::debug!(episode_id = %id, "Delete of absent episode ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/episodes/batch
///
/// Body is a JSON array of ids. Blank and malformed entries are skipped.
pub async fn batch_delete(
    State(state): State<AppState>,
    Json(raw_ids): Json<Vec<String>>,
) -> AppResult<StatusCode> {
    let ids = parse_batch_ids(&raw_ids);
    let removed = EpisodeRepo::batch_delete(&state.pool, &ids).await?;
    tracing::info!(requested = raw_ids.len(), valid = ids.len(), removed, "Batch episode delete");
    Ok(StatusCode::NO_CONTENT)
}
