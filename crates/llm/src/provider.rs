//! Provider abstraction and the named provider registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CompletionError;

/// Text returned by a provider for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The reply, exactly as the provider sent it.
    pub text: String,
    /// Total tokens billed, when the provider reports usage.
    pub tokens_used: Option<u32>,
}

/// A remote text-generation backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Registry key for this provider, e.g. `openai` or `deepseek`.
    fn name(&self) -> &str;

    /// Send a single-turn prompt and return the reply.
    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError>;
}

/// Named providers with one designated default.
///
/// The default is always present, so lookups never fail.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn CompletionProvider>>,
    default_name: String,
}

impl ProviderRegistry {
    /// Create a registry whose default is `default`.
    pub fn new(default: Arc<dyn CompletionProvider>) -> Self {
        let default_name = default.name().to_string();
        let mut providers = HashMap::new();
        providers.insert(default_name.clone(), default);
        Self {
            providers,
            default_name,
        }
    }

    /// Add (or replace) a provider under its own name.
    pub fn register(&mut self, provider: Arc<dyn CompletionProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.register(provider);
        self
    }

    /// The default provider.
    pub fn default_provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.providers[&self.default_name]
    }

    /// Look up a provider by name, falling back to the default when the name
    /// is absent or unknown.
    pub fn resolve(&self, name: Option<&str>) -> &Arc<dyn CompletionProvider> {
        match name {
            None => self.default_provider(),
            Some(name) => match self.providers.get(name) {
                Some(provider) => provider,
                None => {
                    tracing::warn!(
                        requested = name,
                        fallback = %self.default_name,
                        "Unknown completion provider, using default"
                    );
                    self.default_provider()
                }
            },
        }
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    #[async_trait]
    impl CompletionProvider for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError> {
            Ok(Completion {
                text: format!("{}:{prompt}", self.0),
                tokens_used: None,
            })
        }
    }

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(Arc::new(Named("qwen"))).with(Arc::new(Named("deepseek")))
    }

    #[test]
    fn resolves_named_provider() {
        assert_eq!(registry().resolve(Some("deepseek")).name(), "deepseek");
    }

    #[test]
    fn missing_or_unknown_name_falls_back_to_default() {
        let reg = registry();
        assert_eq!(reg.resolve(None).name(), "qwen");
        assert_eq!(reg.resolve(Some("gpt-9")).name(), "qwen");
    }

    #[test]
    fn names_are_sorted() {
        assert_eq!(registry().names(), vec!["deepseek", "qwen"]);
    }

    #[test]
    fn re_registering_replaces() {
        let mut reg = registry();
        reg.register(Arc::new(Named("deepseek")));
        assert_eq!(reg.names().len(), 2);
    }
}
