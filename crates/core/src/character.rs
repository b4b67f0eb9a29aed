//! Character blob types stored in JSON-array columns.

use serde::{Deserialize, Serialize};

/// One edge in a character's relationship list.
///
/// The target is referenced by id and name only; neither is checked against
/// the characters table, so relationships may point at deleted characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRelationship {
    pub related_character_id: Option<String>,
    pub related_character_name: Option<String>,
    /// Free-form label, e.g. "mentor" or "rival".
    pub relationship_type: Option<String>,
    pub description: Option<String>,
}
