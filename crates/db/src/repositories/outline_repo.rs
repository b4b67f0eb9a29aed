//! Repository for the `script_outlines` table.

use screenplay_core::outline::{encode_sections, OutlineSection, StructureType};
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::outline::{CreateOutline, Outline, OutlineRow, UpdateOutline};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, structure_type, sections, created_at, updated_at";

/// Provides CRUD operations for outlines.
///
/// A project has at most one outline, enforced by
/// `uq_script_outlines_project_id`.
pub struct OutlineRepo;

impl OutlineRepo {
    /// Insert a project's outline.
    ///
    /// Returns `None` when the project already has one; the existing row is
    /// left untouched. Safe under concurrent callers.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOutline,
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!(
            "INSERT INTO script_outlines (project_id, structure_type, sections)
             VALUES ($1, $2, $3)
             ON CONFLICT (project_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OutlineRow>(&query)
            .bind(input.project_id)
            .bind(input.structure_type.map(StructureType::as_str))
            .bind(encode_sections(&input.sections))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outline::from))
    }

    /// Find an outline by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_outlines WHERE id = $1");
        let row = sqlx::query_as::<_, OutlineRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outline::from))
    }

    /// Find the outline belonging to a project.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_outlines WHERE project_id = $1");
        let row = sqlx::query_as::<_, OutlineRow>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outline::from))
    }

    /// List every outline, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Outline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_outlines ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, OutlineRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Outline::from).collect())
    }

    /// Replace the structure type and the whole section tree.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOutline,
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!(
            "UPDATE script_outlines SET
                structure_type = $2,
                sections = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OutlineRow>(&query)
            .bind(id)
            .bind(input.structure_type.map(StructureType::as_str))
            .bind(encode_sections(&input.sections))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outline::from))
    }

    /// Set only the structure type.
    pub async fn update_structure_type(
        pool: &PgPool,
        id: DbId,
        structure_type: StructureType,
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!(
            "UPDATE script_outlines SET structure_type = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OutlineRow>(&query)
            .bind(id)
            .bind(structure_type.as_str())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outline::from))
    }

    /// Replace only the section tree.
    pub async fn update_sections(
        pool: &PgPool,
        id: DbId,
        sections: &[OutlineSection],
    ) -> Result<Option<Outline>, sqlx::Error> {
        let query = format!(
            "UPDATE script_outlines SET sections = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OutlineRow>(&query)
            .bind(id)
            .bind(encode_sections(sections))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Outline::from))
    }

    /// Permanently delete an outline by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM script_outlines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
