//! Project entity model and DTOs.

use screenplay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status assigned when a create request omits one.
pub const DEFAULT_STATUS: &str = "CREATED";

/// A project row from the `script_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub summary: Option<String>,
    /// Free-form workflow status, e.g. `CREATED` or `IN_PROGRESS`.
    pub status: String,
    pub author_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub summary: Option<String>,
    /// Defaults to `CREATED` if omitted.
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub author_id: Option<String>,
}

/// DTO for replacing a project's mutable fields.
///
/// Every field is written; an omitted optional field clears the column.
/// `status` is the exception and keeps its current value when omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub summary: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub author_id: Option<String>,
}

/// Body of `PATCH /projects/{id}/theme`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchTheme {
    pub theme: Option<String>,
}

/// Body of `PATCH /projects/{id}/summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchSummary {
    pub summary: Option<String>,
}

/// Body of `PATCH /projects/{id}/status`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PatchStatus {
    #[validate(length(max = 50))]
    pub status: Option<String>,
}
