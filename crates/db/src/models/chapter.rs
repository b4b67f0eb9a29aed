//! Chapter entity model and DTOs.

use screenplay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A chapter row from the `script_chapters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: DbId,
    pub project_id: DbId,
    /// Free-form reference; not checked against `script_episodes`.
    pub episode_id: Option<String>,
    pub chapter_number: i32,
    pub title: String,
    pub content: Option<String>,
    /// Derived from `content` on every write.
    pub word_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapter {
    #[validate(required(message = "projectId is required"))]
    pub project_id: Option<DbId>,
    pub episode_id: Option<String>,
    #[validate(required(message = "chapterNumber is required"), range(min = 1))]
    pub chapter_number: Option<i32>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// DTO for replacing a chapter's mutable fields. The owning project is fixed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChapter {
    pub episode_id: Option<String>,
    #[validate(required(message = "chapterNumber is required"), range(min = 1))]
    pub chapter_number: Option<i32>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub content: Option<String>,
}
