//! Story outline tree and its `sections` column codec.
//!
//! An outline is an ordered list of sections, each holding chapter summaries,
//! each of which lists its episodes. The whole tree is stored as one JSON
//! array in `script_outlines.sections`. Field names are camelCase to stay
//! compatible with rows written before this service existed.
//!
//! The declared counts (`chapterCount`, `episodeCount`) and numbering are not
//! enforced on write; [`count_mismatches`] reports drift for callers that
//! care.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::json_array::{self, null_as_empty};

// ---------------------------------------------------------------------------
// Structure type
// ---------------------------------------------------------------------------

/// The narrative layout an outline follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StructureType {
    /// Four acts: beginning, rising action, climax, end.
    BeginningRisingActionClimaxEnd,
    /// Five beats: hook, rise, continuation, turn, conclusion.
    HookRiseContinuationTurnConclusion,
}

impl StructureType {
    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeginningRisingActionClimaxEnd => "BEGINNING_RISING_ACTION_CLIMAX_END",
            Self::HookRiseContinuationTurnConclusion => "HOOK_RISE_CONTINUATION_TURN_CONCLUSION",
        }
    }

    /// Number of top-level sections the layout calls for.
    pub fn section_count(self) -> usize {
        match self {
            Self::BeginningRisingActionClimaxEnd => 4,
            Self::HookRiseContinuationTurnConclusion => 5,
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNING_RISING_ACTION_CLIMAX_END" => Ok(Self::BeginningRisingActionClimaxEnd),
            "HOOK_RISE_CONTINUATION_TURN_CONCLUSION" => {
                Ok(Self::HookRiseContinuationTurnConclusion)
            }
            other => Err(format!("Unknown outline structure type: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tree nodes
// ---------------------------------------------------------------------------

/// Top-level node of an outline (an act or beat).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSection {
    pub section_id: Option<String>,
    pub section_title: Option<String>,
    pub description: Option<String>,
    /// 1-based position within the outline.
    pub sequence: Option<i32>,
    pub chapter_count: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters: Vec<OutlineChapter>,
    /// Stored verbatim; older rows carry timestamps in non-RFC 3339 shapes.
    pub created_at: Option<serde_json::Value>,
    pub updated_at: Option<serde_json::Value>,
}

/// Chapter summary embedded in a section.
///
/// Not the same thing as a stored chapter row: this is a denormalised
/// projection and is never reconciled against `script_chapters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineChapter {
    pub chapter_id: Option<String>,
    pub chapter_title: Option<String>,
    pub chapter_summary: Option<String>,
    /// 1-based position within the section.
    pub chapter_number: Option<i32>,
    pub episode_count: Option<i32>,
    pub word_count: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub episodes: Vec<OutlineEpisode>,
    pub created_at: Option<serde_json::Value>,
    pub updated_at: Option<serde_json::Value>,
}

/// Episode reference embedded in an outline chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineEpisode {
    pub episode_id: Option<String>,
    pub episode_title: Option<String>,
    /// 1-based position within the chapter.
    pub episode_number: Option<i32>,
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Serialise an outline tree for the `sections` column. Empty input yields `"[]"`.
pub fn encode_sections(sections: &[OutlineSection]) -> String {
    json_array::encode(sections)
}

/// Parse a `sections` column value.
///
/// Never fails: malformed or wrongly shaped text is logged and read as an
/// empty outline so a corrupted blob cannot break a read path.
pub fn decode_sections(text: &str) -> Vec<OutlineSection> {
    json_array::decode(Some(text))
}

/// Whether `text` is structurally acceptable as a `sections` value (a JSON array).
pub fn is_valid_sections(text: &str) -> bool {
    json_array::is_valid(text)
}

// ---------------------------------------------------------------------------
// Consistency report
// ---------------------------------------------------------------------------

/// A declared count that disagrees with the number of child nodes present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    /// Slash-separated position, e.g. `sections[1]/chapters[0]`.
    pub path: String,
    /// `chapterCount`, `episodeCount`, or `sections` for the layout check.
    pub field: &'static str,
    pub declared: i32,
    pub actual: usize,
}

/// Find every node whose declared child count differs from its actual child list.
///
/// Nodes without a declared count are skipped.
pub fn count_mismatches(sections: &[OutlineSection]) -> Vec<CountMismatch> {
    let mut out = Vec::new();
    for (si, section) in sections.iter().enumerate() {
        let section_path = format!("sections[{si}]");
        if let Some(declared) = section.chapter_count {
            if usize::try_from(declared).ok() != Some(section.chapters.len()) {
                out.push(CountMismatch {
                    path: section_path.clone(),
                    field: "chapterCount",
                    declared,
                    actual: section.chapters.len(),
                });
            }
        }
        for (ci, chapter) in section.chapters.iter().enumerate() {
            if let Some(declared) = chapter.episode_count {
                if usize::try_from(declared).ok() != Some(chapter.episodes.len()) {
                    out.push(CountMismatch {
                        path: format!("{section_path}/chapters[{ci}]"),
                        field: "episodeCount",
                        declared,
                        actual: chapter.episodes.len(),
                    });
                }
            }
        }
    }
    out
}

/// Compare the number of top-level sections with what `structure_type` calls for.
///
/// An empty tree is a fresh outline and is not reported.
pub fn layout_mismatch(
    structure_type: StructureType,
    sections: &[OutlineSection],
) -> Option<CountMismatch> {
    let expected = structure_type.section_count();
    if sections.is_empty() || sections.len() == expected {
        return None;
    }
    Some(CountMismatch {
        path: String::new(),
        field: "sections",
        declared: i32::try_from(expected).unwrap_or(i32::MAX),
        actual: sections.len(),
    })
}
