//! Episode entity model and DTOs.

use screenplay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An episode row from the `script_episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: DbId,
    pub project_id: DbId,
    /// Either a stored chapter id or an outline chapter id.
    pub chapter_id: String,
    pub episode_number: i32,
    pub episode_title: String,
    pub episode_content: Option<String>,
    pub word_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new episode.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpisode {
    #[validate(required(message = "projectId is required"))]
    pub project_id: Option<DbId>,
    pub chapter_id: Option<String>,
    #[validate(required(message = "episodeNumber is required"), range(min = 1))]
    pub episode_number: Option<i32>,
    #[validate(length(max = 255))]
    pub episode_title: Option<String>,
    pub episode_content: Option<String>,
}

/// DTO for replacing an episode's mutable fields. Project and chapter are fixed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEpisode {
    #[validate(required(message = "episodeNumber is required"), range(min = 1))]
    pub episode_number: Option<i32>,
    #[validate(length(max = 255))]
    pub episode_title: Option<String>,
    pub episode_content: Option<String>,
}

/// Body of `PATCH /episodes/{id}/title`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchEpisodeTitle {
    #[validate(length(max = 255))]
    pub episode_title: Option<String>,
}

/// Body of `PATCH /episodes/{id}/content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchEpisodeContent {
    pub episode_content: Option<String>,
}

/// Body of `PATCH /episodes/{id}/word-count`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchWordCount {
    #[validate(required(message = "wordCount is required"), range(min = 0))]
    pub word_count: Option<i32>,
}
