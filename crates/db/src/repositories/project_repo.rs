//! Repository for the `script_projects` table.

use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject, DEFAULT_STATUS};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, theme, summary, status, author_id, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `CREATED`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO script_projects (title, description, theme, summary, status, author_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, $6), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.theme)
            .bind(&input.summary)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .bind(&input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project's mutable fields. `status` keeps its value when omitted.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE script_projects SET
                title = $2,
                description = $3,
                theme = $4,
                summary = $5,
                status = COALESCE($6, status),
                author_id = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.theme)
            .bind(&input.summary)
            .bind(&input.status)
            .bind(&input.author_id)
            .fetch_optional(pool)
            .await
    }

    /// Set the theme. `None` clears it.
    pub async fn update_theme(
        pool: &PgPool,
        id: DbId,
        theme: Option<&str>,
    ) -> Result<Option<Project>, sqlx::Error> {
        Self::set_text_column(pool, id, "theme", theme).await
    }

    /// Set the summary. `None` clears it.
    pub async fn update_summary(
        pool: &PgPool,
        id: DbId,
        summary: Option<&str>,
    ) -> Result<Option<Project>, sqlx::Error> {
        Self::set_text_column(pool, id, "summary", summary).await
    }

    /// Set the workflow status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        Self::set_text_column(pool, id, "status", Some(status)).await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Characters, chapters, episodes and the outline are left in place.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM script_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `column` is always one of the literals above, never caller input.
    async fn set_text_column(
        pool: &PgPool,
        id: DbId,
        column: &'static str,
        value: Option<&str>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE script_projects SET {column} = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(pool)
            .await
    }
}
