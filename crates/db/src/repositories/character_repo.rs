//! Repository for the `script_characters` table.

use screenplay_core::json_array;
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CharacterRow, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, age, gender, personality_tags, role_in_story, \
    skills, character_setting, character_relationships, created_at, updated_at";

/// Provides CRUD operations for characters.
///
/// List columns are encoded on the way in and decoded on the way out; a
/// corrupted blob reads back as an empty list.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO script_characters
                (project_id, name, age, gender, personality_tags, role_in_story,
                 skills, character_setting, character_relationships)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterRow>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .bind(json_array::encode(&input.personality_tags))
            .bind(&input.role_in_story)
            .bind(json_array::encode(&input.skills))
            .bind(&input.character_setting)
            .bind(json_array::encode(&input.character_relationships))
            .fetch_one(pool)
            .await
            .map(Character::from)
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_characters WHERE id = $1");
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Character::from))
    }

    /// List every character, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM script_characters ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, CharacterRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    /// List characters belonging to a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_characters
             WHERE project_id = $1
             ORDER BY created_at, id"
        );
        let rows = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    /// Replace a character's mutable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE script_characters SET
                name = $2,
                age = $3,
                gender = $4,
                personality_tags = $5,
                role_in_story = $6,
                skills = $7,
                character_setting = $8,
                character_relationships = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .bind(json_array::encode(&input.personality_tags))
            .bind(&input.role_in_story)
            .bind(json_array::encode(&input.skills))
            .bind(&input.character_setting)
            .bind(json_array::encode(&input.character_relationships))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Character::from))
    }

    /// Permanently delete a character by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM script_characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
