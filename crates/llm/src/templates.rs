//! Prompt templates and the lazily populated template library.
//!
//! Every [`GenerationKind`] has a built-in template. A deployment can
//! override any of them by dropping `<kind>.txt` into the configured
//! template directory; the file must contain a `{request}` placeholder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::kind::GenerationKind;

/// Placeholder replaced by the user's request text in template files.
pub const REQUEST_PLACEHOLDER: &str = "{request}";

/// A prompt split around the point where user input is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl PromptTemplate {
    /// Concatenate `prefix + request + suffix`. The request is not escaped or trimmed.
    pub fn render(&self, request: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + request.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(request);
        out.push_str(&self.suffix);
        out
    }

    /// Parse template text, splitting at the first `{request}`.
    ///
    /// Returns `None` when the placeholder is missing.
    pub fn parse(text: &str) -> Option<Self> {
        let (prefix, suffix) = text.split_once(REQUEST_PLACEHOLDER)?;
        Some(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// The template compiled into the binary for `kind`.
    pub fn builtin(kind: GenerationKind) -> Self {
        let (prefix, suffix) = match kind {
            GenerationKind::Creative => (
                "Brainstorm screenplay ideas for the following request: ",
                "",
            ),
            GenerationKind::Theme => (
                "Write the thematic background of a story for the following request: ",
                "\nDescribe the setting, the central theme and the tone.",
            ),
            GenerationKind::Summary => (
                "Write a plot summary from the following information: ",
                "\nKeep it to a few paragraphs covering the main arc.",
            ),
            GenerationKind::Characters => (
                "Design characters for the following requirements: ",
                "\nFor each character give name, age, personality, role and relationships.",
            ),
            GenerationKind::Outline => (
                "Write a story outline for the following requirements: ",
                "\nOrganise it into sections, each listing its chapters and episodes.",
            ),
            GenerationKind::Chapter => (
                "Write chapter content for the following requirements: ",
                "\nWrite in screenplay form with scene headings and dialogue.",
            ),
        };
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// Resolves the template for each kind, reading override files at most once.
///
/// Lookups are memoised behind a mutex; the first request for a kind pays the
/// file read, later ones clone an `Arc`.
#[derive(Debug, Default)]
pub struct TemplateLibrary {
    dir: Option<PathBuf>,
    cache: Mutex<HashMap<GenerationKind, Arc<PromptTemplate>>>,
}

impl TemplateLibrary {
    /// A library that only serves built-in templates.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// A library that prefers `<dir>/<kind>.txt` over the built-ins.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            cache: Mutex::default(),
        }
    }

    /// The template to use for `kind`.
    pub fn get(&self, kind: GenerationKind) -> Arc<PromptTemplate> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(
            cache
                .entry(kind)
                .or_insert_with(|| Arc::new(self.load(kind))),
        )
    }

    /// Number of kinds resolved so far.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Forget every resolved template so override files are re-read.
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    fn load(&self, kind: GenerationKind) -> PromptTemplate {
        let Some(dir) = &self.dir else {
            return PromptTemplate::builtin(kind);
        };
        match read_override(dir, kind) {
            Some(template) => {
                tracing::info!(kind = %kind, dir = %dir.display(), "Loaded prompt template override");
                template
            }
            None => PromptTemplate::builtin(kind),
        }
    }
}

fn read_override(dir: &Path, kind: GenerationKind) -> Option<PromptTemplate> {
    let path = dir.join(format!("{}.txt", kind.route_name()));
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read prompt template");
            return None;
        }
    };
    let template = PromptTemplate::parse(&text);
    if template.is_none() {
        tracing::warn!(
            path = %path.display(),
            "Prompt template has no {{request}} placeholder, using built-in"
        );
    }
    template
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "screenplay-templates-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn render_is_plain_concatenation() {
        let t = PromptTemplate {
            prefix: "A: ".to_string(),
            suffix: " :Z".to_string(),
        };
        assert_eq!(t.render("middle"), "A: middle :Z");
        assert_eq!(t.render(""), "A:  :Z");
    }

    #[test]
    fn parse_splits_on_first_placeholder() {
        let t = PromptTemplate::parse("before {request} after {request}").unwrap();
        assert_eq!(t.prefix, "before ");
        assert_eq!(t.suffix, " after {request}");
        assert!(PromptTemplate::parse("no placeholder").is_none());
    }

    #[test]
    fn every_kind_has_a_builtin_prefix() {
        for kind in GenerationKind::ALL {
            let t = PromptTemplate::builtin(kind);
            assert!(!t.prefix.is_empty(), "{kind} has an empty prefix");
            assert!(t.render("xyz").contains("xyz"));
        }
    }

    #[test]
    fn library_without_dir_serves_builtins() {
        let lib = TemplateLibrary::builtin();
        assert_eq!(
            *lib.get(GenerationKind::Outline),
            PromptTemplate::builtin(GenerationKind::Outline)
        );
    }

    #[test]
    fn override_file_replaces_builtin_and_is_memoised() {
        let dir = scratch_dir("override");
        std::fs::write(dir.join("theme.txt"), "THEME<{request}>").unwrap();

        let lib = TemplateLibrary::with_dir(&dir);
        assert_eq!(lib.get(GenerationKind::Theme).render("sea"), "THEME<sea>");
        assert_eq!(lib.cached_len(), 1);

        // Later edits are not seen until the cache is cleared.
        std::fs::write(dir.join("theme.txt"), "NEW {request}").unwrap();
        assert_eq!(lib.get(GenerationKind::Theme).render("sea"), "THEME<sea>");
        lib.clear();
        assert_eq!(lib.get(GenerationKind::Theme).render("sea"), "NEW sea");

        // Kinds without a file fall back to the built-in.
        assert_eq!(
            *lib.get(GenerationKind::Chapter),
            PromptTemplate::builtin(GenerationKind::Chapter)
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn override_without_placeholder_is_ignored() {
        let dir = scratch_dir("noplaceholder");
        std::fs::write(dir.join("summary.txt"), "Just text").unwrap();

        let lib = TemplateLibrary::with_dir(&dir);
        assert_eq!(
            *lib.get(GenerationKind::Summary),
            PromptTemplate::builtin(GenerationKind::Summary)
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
