//! Repository for the `script_episodes` table.

use screenplay_core::content::word_count;
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode::{CreateEpisode, Episode, UpdateEpisode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, chapter_id, episode_number, episode_title, \
    episode_content, word_count, created_at, updated_at";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    ///
    /// `word_count` is derived from `episode_content`.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO script_episodes
                (project_id, chapter_id, episode_number, episode_title, episode_content, word_count)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.project_id)
            .bind(&input.chapter_id)
            .bind(input.episode_number)
            .bind(&input.episode_title)
            .bind(&input.episode_content)
            .bind(word_count(input.episode_content.as_deref()))
            .fetch_one(pool)
            .await
    }

    /// Find an episode by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every episode ordered by project, chapter, then episode number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_episodes
             ORDER BY project_id, chapter_id, episode_number"
        );
        sqlx::query_as::<_, Episode>(&query).fetch_all(pool).await
    }

    /// List episodes of a project ordered by `(chapter_id, episode_number)`.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_episodes
             WHERE project_id = $1
             ORDER BY chapter_id, episode_number"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List episodes referencing a chapter id, across all projects.
    pub async fn list_by_chapter(
        pool: &PgPool,
        chapter_id: &str,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_episodes
             WHERE chapter_id = $1
             ORDER BY episode_number"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(chapter_id)
            .fetch_all(pool)
            .await
    }

    /// List the episodes of one chapter within one project.
    pub async fn list_by_project_and_chapter(
        pool: &PgPool,
        project_id: DbId,
        chapter_id: &str,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_episodes
             WHERE project_id = $1 AND chapter_id = $2
             ORDER BY episode_number"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(project_id)
            .bind(chapter_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an episode's mutable fields, re-deriving `word_count`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE script_episodes SET
                episode_number = $2,
                episode_title = $3,
                episode_content = $4,
                word_count = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(input.episode_number)
            .bind(&input.episode_title)
            .bind(&input.episode_content)
            .bind(word_count(input.episode_content.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Set the title.
    pub async fn update_title(
        pool: &PgPool,
        id: DbId,
        title: &str,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE script_episodes SET episode_title = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Set the content and re-derive `word_count`. `None` clears the content.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: Option<&str>,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE script_episodes SET episode_content = $2, word_count = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(content)
            .bind(word_count(content))
            .fetch_optional(pool)
            .await
    }

    /// Overwrite `word_count` directly. The next content write re-derives it.
    pub async fn update_word_count(
        pool: &PgPool,
        id: DbId,
        count: i32,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE script_episodes SET word_count = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(count)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an episode by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM script_episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every listed episode in one statement. Returns the number removed.
    ///
    /// An empty slice is a no-op and never reaches the database.
    pub async fn batch_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM script_episodes WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
