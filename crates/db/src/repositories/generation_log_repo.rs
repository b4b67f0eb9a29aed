//! Repository for the `ai_generation_logs` table.

use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::generation_log::{GenerationLog, NewGenerationLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, generation_type, provider, prompt, response, \
    tokens_used, execution_time_ms, status, error_message, created_at";

/// Append-only access to generation logs.
pub struct GenerationLogRepo;

impl GenerationLogRepo {
    /// Insert a log row, returning it.
    pub async fn create(
        pool: &PgPool,
        input: &NewGenerationLog,
    ) -> Result<GenerationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO ai_generation_logs
                (project_id, generation_type, provider, prompt, response, tokens_used,
                 execution_time_ms, status, error_message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GenerationLog>(&query)
            .bind(input.project_id)
            .bind(&input.generation_type)
            .bind(&input.provider)
            .bind(&input.prompt)
            .bind(&input.response)
            .bind(input.tokens_used)
            .bind(input.execution_time_ms)
            .bind(input.status)
            .bind(&input.error_message)
            .fetch_one(pool)
            .await
    }

    /// List a project's logs, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<GenerationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ai_generation_logs
             WHERE project_id = $1
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, GenerationLog>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
