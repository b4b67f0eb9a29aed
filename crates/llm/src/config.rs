//! Provider configuration loaded from environment variables.

use std::path::PathBuf;

/// Settings for one named chat-completion endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Registry key, lower-case (e.g. `qwen`).
    pub name: String,
    /// Base URL without the trailing `/chat/completions`.
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Gateway configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Every configured provider, in `LLM_PROVIDERS` order. Never empty.
    pub providers: Vec<ProviderSettings>,
    /// Name of the provider used when a request does not pick one.
    pub default_provider: String,
    /// Directory holding `<kind>.txt` prompt overrides.
    pub template_dir: Option<PathBuf>,
    /// Per-request timeout for provider calls in seconds.
    pub request_timeout_secs: u64,
}

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                      |
    /// |-----------------------------|------------------------------|
    /// | `LLM_PROVIDERS`             | `openai`                     |
    /// | `LLM_DEFAULT_PROVIDER`      | first entry of the list      |
    /// | `LLM_<NAME>_BASE_URL`       | `https://api.openai.com/v1`  |
    /// | `LLM_<NAME>_API_KEY`        | unset                        |
    /// | `LLM_<NAME>_MODEL`          | `gpt-4o-mini`                |
    /// | `LLM_<NAME>_TEMPERATURE`    | unset (provider default)     |
    /// | `LLM_<NAME>_MAX_TOKENS`     | unset (provider default)     |
    /// | `LLM_TEMPLATE_DIR`          | unset (built-in templates)   |
    /// | `LLM_REQUEST_TIMEOUT_SECS`  | `120`                        |
    ///
    /// `<NAME>` is the provider name upper-cased, e.g. `LLM_QWEN_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    ///
    /// Panics on malformed values; configuration errors should stop start-up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let names: Vec<String> = lookup("LLM_PROVIDERS")
            .unwrap_or_else(|| "openai".into())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        assert!(!names.is_empty(), "LLM_PROVIDERS must name at least one provider");

        let providers: Vec<ProviderSettings> = names
            .iter()
            .map(|name| {
                let var = |suffix: &str| lookup(&format!("LLM_{}_{suffix}", name.to_uppercase()));
                ProviderSettings {
                    name: name.clone(),
                    base_url: var("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
                    api_key: var("API_KEY").filter(|k| !k.is_empty()),
                    model: var("MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                    temperature: var("TEMPERATURE").map(|v| {
                        v.parse()
                            .unwrap_or_else(|_| panic!("LLM_{}_TEMPERATURE must be a number", name.to_uppercase()))
                    }),
                    max_tokens: var("MAX_TOKENS").map(|v| {
                        v.parse()
                            .unwrap_or_else(|_| panic!("LLM_{}_MAX_TOKENS must be a valid u32", name.to_uppercase()))
                    }),
                }
            })
            .collect();

        let default_provider = lookup("LLM_DEFAULT_PROVIDER")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|| names[0].clone());
        assert!(
            names.contains(&default_provider),
            "LLM_DEFAULT_PROVIDER '{default_provider}' is not listed in LLM_PROVIDERS"
        );

        let template_dir = lookup("LLM_TEMPLATE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout_secs: u64 = lookup("LLM_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "120".into())
            .parse()
            .expect("LLM_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            providers,
            default_provider,
            template_dir,
            request_timeout_secs,
        }
    }
}
