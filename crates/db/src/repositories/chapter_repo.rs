//! Repository for the `script_chapters` table.

use screenplay_core::content::word_count;
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::chapter::{Chapter, CreateChapter, UpdateChapter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, episode_id, chapter_number, title, content, \
    word_count, created_at, updated_at";

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter, returning the created row.
    ///
    /// `word_count` is derived from `content`.
    pub async fn create(pool: &PgPool, input: &CreateChapter) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO script_chapters
                (project_id, episode_id, chapter_number, title, content, word_count)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(input.project_id)
            .bind(&input.episode_id)
            .bind(input.chapter_number)
            .bind(&input.title)
            .bind(&input.content)
            .bind(word_count(input.content.as_deref()))
            .fetch_one(pool)
            .await
    }

    /// Find a chapter by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_chapters WHERE id = $1");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List chapters of a project ordered by chapter number.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_chapters
             WHERE project_id = $1
             ORDER BY chapter_number, created_at"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List the chapters of a project carrying a given number.
    ///
    /// Numbers are not unique, so this can return several rows.
    pub async fn list_by_project_and_number(
        pool: &PgPool,
        project_id: DbId,
        chapter_number: i32,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_chapters
             WHERE project_id = $1 AND chapter_number = $2
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(project_id)
            .bind(chapter_number)
            .fetch_all(pool)
            .await
    }

    /// Replace a chapter's mutable fields, re-deriving `word_count`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChapter,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "UPDATE script_chapters SET
                episode_id = $2,
                chapter_number = $3,
                title = $4,
                content = $5,
                word_count = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(&input.episode_id)
            .bind(input.chapter_number)
            .bind(&input.title)
            .bind(&input.content)
            .bind(word_count(input.content.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a chapter by ID. Returns `true` if a row was removed.
    ///
    /// Episodes referencing the chapter are left in place.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM script_chapters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
