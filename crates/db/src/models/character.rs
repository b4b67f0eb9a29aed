//! Character entity model and DTOs.
//!
//! Tags, skills and relationships live in JSON-array `TEXT` columns. The
//! repository reads [`CharacterRow`] and hands out the decoded [`Character`].

use screenplay_core::character::CharacterRelationship;
use screenplay_core::json_array::{self, null_as_empty};
use screenplay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A raw row from the `script_characters` table.
#[derive(Debug, Clone, FromRow)]
pub struct CharacterRow {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub personality_tags: String,
    pub role_in_story: Option<String>,
    pub skills: String,
    pub character_setting: Option<String>,
    pub character_relationships: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A character with its list columns decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub personality_tags: Vec<String>,
    pub role_in_story: Option<String>,
    pub skills: Vec<String>,
    pub character_setting: Option<String>,
    pub character_relationships: Vec<CharacterRelationship>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            personality_tags: json_array::decode(Some(&row.personality_tags)),
            skills: json_array::decode(Some(&row.skills)),
            character_relationships: json_array::decode(Some(&row.character_relationships)),
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            age: row.age,
            gender: row.gender,
            role_in_story: row.role_in_story,
            character_setting: row.character_setting,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[validate(required(message = "projectId is required"))]
    pub project_id: Option<DbId>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 10000))]
    pub age: Option<i32>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub personality_tags: Vec<String>,
    pub role_in_story: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    pub character_setting: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character_relationships: Vec<CharacterRelationship>,
}

/// DTO for replacing a character's mutable fields. The owning project is fixed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 10000))]
    pub age: Option<i32>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub personality_tags: Vec<String>,
    pub role_in_story: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    pub character_setting: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character_relationships: Vec<CharacterRelationship>,
}
