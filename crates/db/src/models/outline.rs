//! Story outline model and DTOs.
//!
//! The section tree is persisted as JSON text; see
//! [`screenplay_core::outline`] for the codec and tree types.

use screenplay_core::json_array::null_as_empty;
use screenplay_core::outline::{decode_sections, is_valid_sections, OutlineSection, StructureType};
use screenplay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A raw row from the `script_outlines` table.
#[derive(Debug, Clone, FromRow)]
pub struct OutlineRow {
    pub id: DbId,
    pub project_id: DbId,
    pub structure_type: String,
    pub sections: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An outline with its section tree decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub id: DbId,
    pub project_id: DbId,
    /// One of the [`StructureType`] names; the column carries a CHECK constraint.
    pub structure_type: String,
    pub sections: Vec<OutlineSection>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<OutlineRow> for Outline {
    fn from(row: OutlineRow) -> Self {
        let sections = if is_valid_sections(&row.sections) {
            decode_sections(&row.sections)
        } else {
            tracing::warn!(
                outline_id = %row.id,
                len = row.sections.len(),
                "Outline sections column is not a JSON array, reading as empty"
            );
            Vec::new()
        };
        Self {
            id: row.id,
            project_id: row.project_id,
            structure_type: row.structure_type,
            sections,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a project's outline.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutline {
    #[validate(required(message = "projectId is required"))]
    pub project_id: Option<DbId>,
    #[validate(required(message = "structureType is required"))]
    pub structure_type: Option<StructureType>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: Vec<OutlineSection>,
}

/// DTO for replacing an outline. The owning project is fixed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutline {
    #[validate(required(message = "structureType is required"))]
    pub structure_type: Option<StructureType>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: Vec<OutlineSection>,
}

/// Body of `PATCH /outlines/{id}/structure-type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchStructureType {
    pub structure_type: Option<StructureType>,
}

/// Body of `PATCH /outlines/{id}/sections`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchSections {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: Vec<OutlineSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sections: &str) -> OutlineRow {
        OutlineRow {
            id: DbId::new_v4(),
            project_id: DbId::new_v4(),
            structure_type: StructureType::BeginningRisingActionClimaxEnd.as_str().to_string(),
            sections: sections.to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn non_array_sections_read_as_empty() {
        assert!(Outline::from(row("{\"sectionId\": \"s1\"}")).sections.is_empty());
        assert!(Outline::from(row("null")).sections.is_empty());
    }

    #[test]
    fn array_sections_are_decoded() {
        let outline = Outline::from(row("[{\"sectionId\": \"s1\", \"chapters\": null}]"));
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].section_id.as_deref(), Some("s1"));
        assert!(outline.sections[0].chapters.is_empty());
    }
}
