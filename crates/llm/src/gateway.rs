//! The completion gateway: template rendering plus provider dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::LlmConfig;
use crate::error::CompletionError;
use crate::kind::GenerationKind;
use crate::openai::OpenAiCompatibleProvider;
use crate::provider::{CompletionProvider, ProviderRegistry};
use crate::templates::TemplateLibrary;

/// Everything the caller needs to answer the request and log the call.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// Name of the provider that handled the call.
    pub provider: String,
    /// The rendered prompt that was sent.
    pub prompt: String,
    /// Provider reply, or the error it failed with.
    pub result: Result<String, CompletionError>,
    pub tokens_used: Option<u32>,
    pub elapsed: Duration,
}

impl GenerationOutcome {
    /// Elapsed wall time in milliseconds, saturating.
    pub fn elapsed_ms(&self) -> i64 {
        i64::try_from(self.elapsed.as_millis()).unwrap_or(i64::MAX)
    }
}

/// Stateless façade over the template library and provider registry.
///
/// Requests are not validated, retried or post-processed; a failed call is
/// reported once and the reply text is returned exactly as received.
pub struct CompletionGateway {
    templates: TemplateLibrary,
    providers: ProviderRegistry,
}

impl CompletionGateway {
    pub fn new(templates: TemplateLibrary, providers: ProviderRegistry) -> Self {
        Self {
            templates,
            providers,
        }
    }

    /// Build every configured provider and the template library.
    pub fn from_config(config: &LlmConfig) -> Result<Self, CompletionError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let mut built: Vec<Arc<dyn CompletionProvider>> = Vec::with_capacity(config.providers.len());
        for settings in &config.providers {
            built.push(Arc::new(OpenAiCompatibleProvider::new(settings, timeout)?));
        }

        let default_idx = config
            .providers
            .iter()
            .position(|p| p.name == config.default_provider)
            .unwrap_or(0);
        let default = built
            .get(default_idx)
            .cloned()
            .ok_or_else(|| CompletionError::Config("no completion provider configured".into()))?;
        let mut registry = ProviderRegistry::new(default);
        for provider in built {
            registry.register(provider);
        }

        let templates = match &config.template_dir {
            Some(dir) => TemplateLibrary::with_dir(dir),
            None => TemplateLibrary::builtin(),
        };
        Ok(Self::new(templates, registry))
    }

    /// The prompt that would be sent for `kind` and `request`.
    pub fn render(&self, kind: GenerationKind, request: &str) -> String {
        self.templates.get(kind).render(request)
    }

    /// Render and send using the default provider.
    pub async fn complete(&self, kind: GenerationKind, request: &str) -> GenerationOutcome {
        self.complete_with(None, kind, request).await
    }

    /// Render and send using the named provider, or the default if the name
    /// is `None` or unknown.
    pub async fn complete_with(
        &self,
        provider: Option<&str>,
        kind: GenerationKind,
        request: &str,
    ) -> GenerationOutcome {
        let provider = self.providers.resolve(provider);
        let prompt = self.render(kind, request);

        let started = Instant::now();
        let result = provider.complete(&prompt).await;
        let elapsed = started.elapsed();

        let (result, tokens_used) = match result {
            Ok(completion) => {
                tracing::info!(
                    kind = %kind,
                    provider = provider.name(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    tokens = completion.tokens_used,
                    "Completion succeeded"
                );
                (Ok(completion.text), completion.tokens_used)
            }
            Err(e) => {
                tracing::warn!(
                    kind = %kind,
                    provider = provider.name(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "Completion failed"
                );
                (Err(e), None)
            }
        };

        GenerationOutcome {
            provider: provider.name().to_string(),
            prompt,
            result,
            tokens_used,
            elapsed,
        }
    }

    /// Registered provider names, sorted.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.names()
    }
}
