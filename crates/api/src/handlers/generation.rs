//! Handlers for `/ai` text generation and its call log.

use axum::extract::{Path, State};
use axum::Json;
use screenplay_core::types::DbId;
use screenplay_db::models::generation_log::{
    GenerationLog, NewGenerationLog, STATUS_FAILED, STATUS_SUCCESS,
};
use screenplay_db::repositories::GenerationLogRepo;
use screenplay_llm::{GenerationKind, GenerationOutcome};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /ai/generate/{kind}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Free text inserted into the prompt template. Missing or null means empty.
    #[serde(default)]
    pub request: Option<String>,
    /// Project the generation log row is attributed to. Kept as text so a
    /// malformed id only drops the attribution.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Provider name; unknown names fall back to the default provider.
    pub provider: Option<String>,
}

/// Response body for `POST /ai/generate/{kind}`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Provider reply, unmodified.
    pub result: String,
}

/// POST /api/v1/ai/generate/{kind}
///
/// `kind` is one of `creative`, `theme`, `summary`, `characters`, `outline`,
/// `chapter`. Every call is recorded in `ai_generation_logs`.
pub async fn generate(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let kind: GenerationKind = kind.parse().map_err(AppError::BadRequest)?;
    let request = input.request.unwrap_or_default();
    let project_id = input.project_id.as_deref().and_then(parse_project_id);

    let outcome = state
        .gateway
        .complete_with(input.provider.as_deref(), kind, &request)
        .await;

    record_outcome(&state, project_id, kind, &outcome).await;

    let result = outcome.result?;
    Ok(Json(GenerateResponse { result }))
}

/// GET /api/v1/projects/{id}/generation-logs
pub async fn list_logs_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<GenerationLog>>> {
    let logs = GenerationLogRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(logs))
}

/// Parse the optional attribution id; blank or malformed ids are ignored.
fn parse_project_id(raw: &str) -> Option<DbId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(project_id = raw, "Ignoring malformed projectId on generation request");
            None
        }
    }
}

/// Persist a log row for `outcome`. Failures are traced and swallowed.
async fn record_outcome(
    state: &AppState,
    project_id: Option<DbId>,
    kind: GenerationKind,
    outcome: &GenerationOutcome,
) {
    let (status, response, error_message) = match &outcome.result {
        Ok(text) => (STATUS_SUCCESS, Some(text.clone()), None),
        Err(e) => (STATUS_FAILED, None, Some(e.to_string())),
    };
    let entry = NewGenerationLog {
        project_id,
        generation_type: kind.log_type().to_string(),
        provider: Some(outcome.provider.clone()),
        prompt: outcome.prompt.clone(),
        response,
        tokens_used: outcome
            .tokens_used
            .map(|t| i32::try_from(t).unwrap_or(i32::MAX)),
        execution_time_ms: outcome.elapsed_ms(),
        status,
        error_message,
    };
    if let Err(e) = GenerationLogRepo::create(&state.pool, &entry).await {
        tracing::warn!(error = %e, kind = %kind, "Failed to record generation log");
    }
}
