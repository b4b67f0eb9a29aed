//! Generation log model.
//!
//! Rows are written by the API layer after every completion call and are
//! never updated.

use screenplay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Status of a completion call that returned text.
pub const STATUS_SUCCESS: &str = "SUCCESS";
/// Status of a completion call that errored.
pub const STATUS_FAILED: &str = "FAILED";

/// A row from the `ai_generation_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationLog {
    pub id: DbId,
    pub project_id: Option<DbId>,
    /// Upper-case kind name, e.g. `OUTLINE`.
    pub generation_type: String,
    pub provider: Option<String>,
    pub prompt: String,
    pub response: Option<String>,
    pub tokens_used: Option<i32>,
    pub execution_time_ms: i64,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: Timestamp,
}

/// Insert payload for a generation log row.
#[derive(Debug, Clone)]
pub struct NewGenerationLog {
    pub project_id: Option<DbId>,
    pub generation_type: String,
    pub provider: Option<String>,
    pub prompt: String,
    pub response: Option<String>,
    pub tokens_used: Option<i32>,
    pub execution_time_ms: i64,
    pub status: &'static str,
    pub error_message: Option<String>,
}
