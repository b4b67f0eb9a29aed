//! The fixed set of generation requests the gateway accepts.

use std::fmt;
use std::str::FromStr;

/// What the caller wants generated. Selects the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationKind {
    Creative,
    Theme,
    Summary,
    Characters,
    Outline,
    Chapter,
}

impl GenerationKind {
    pub const ALL: [GenerationKind; 6] = [
        Self::Creative,
        Self::Theme,
        Self::Summary,
        Self::Characters,
        Self::Outline,
        Self::Chapter,
    ];

    /// Path segment under `/ai/generate/` and template file stem.
    pub fn route_name(self) -> &'static str {
        match self {
            Self::Creative => "creative",
            Self::Theme => "theme",
            Self::Summary => "summary",
            Self::Characters => "characters",
            Self::Outline => "outline",
            Self::Chapter => "chapter",
        }
    }

    /// Value written to `ai_generation_logs.generation_type`.
    pub fn log_type(self) -> &'static str {
        match self {
            Self::Creative => "CREATIVE",
            Self::Theme => "THEME",
            Self::Summary => "SUMMARY",
            Self::Characters => "CHARACTER",
            Self::Outline => "OUTLINE",
            Self::Chapter => "CHAPTER",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

impl FromStr for GenerationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.route_name() == s)
            .ok_or_else(|| format!("Unknown generation kind: {s}"))
    }
}
