use std::env;

use thiserror::Error;

use crate::config_env::{
    EnvLookup, optional_trimmed_env, parse_bool_env, parse_http_url_env, parse_u64_env,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_SESSION_HISTORY_LIMIT: u64 = 100;
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_OPENROUTER_MODEL: &str = "xai/grok-beta";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub independent_mode: bool,
    pub session_history_limit: usize,
    pub upstream: UpstreamConfig,
}

/// Credentials and endpoints for the optional chat-completion providers.
/// A provider is `None` when its API key is unset or blank.
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    pub timeout_ms: u64,
    pub openrouter: Option<ProviderSettings>,
    pub openai: Option<ProviderSettings>,
    pub anthropic: Option<ProviderSettings>,
}

#[derive(Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub url: String,
    pub model: String,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"<redacted>")
            .field("url", &self.url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer in env var {key}: {value}")]
    ParseInt { key: String, value: String },
    #[error("invalid boolean in env var {0}")]
    ParseBool(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to load .env file: {0}")]
    Dotenv(String),
}

/// Loads a `.env` file from the working directory if one exists.
pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::Dotenv(err.to_string())),
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let session_history_limit =
            parse_u64_env(lookup, "SESSION_HISTORY_LIMIT", DEFAULT_SESSION_HISTORY_LIMIT)?;
        if session_history_limit == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "SESSION_HISTORY_LIMIT must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            bind_addr: optional_trimmed_env(lookup, "API_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            independent_mode: parse_bool_env(lookup, "INDEPENDENT_MODE", true)?,
            session_history_limit: usize::try_from(session_history_limit).map_err(|_| {
                ConfigError::InvalidConfiguration(
                    "SESSION_HISTORY_LIMIT does not fit in memory".to_string(),
                )
            })?,
            upstream: UpstreamConfig {
                timeout_ms: parse_u64_env(
                    lookup,
                    "UPSTREAM_TIMEOUT_MS",
                    DEFAULT_UPSTREAM_TIMEOUT_MS,
                )?,
                openrouter: provider_settings(
                    lookup,
                    "OPENROUTER_API_KEY",
                    ("OPENROUTER_CHAT_COMPLETIONS_URL", DEFAULT_OPENROUTER_URL),
                    ("OPENROUTER_MODEL", DEFAULT_OPENROUTER_MODEL),
                )?,
                openai: provider_settings(
                    lookup,
                    "OPENAI_API_KEY",
                    ("OPENAI_CHAT_COMPLETIONS_URL", DEFAULT_OPENAI_URL),
                    ("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                )?,
                anthropic: provider_settings(
                    lookup,
                    "ANTHROPIC_API_KEY",
                    ("ANTHROPIC_MESSAGES_URL", DEFAULT_ANTHROPIC_URL),
                    ("ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL),
                )?,
            },
        })
    }
}

fn provider_settings(
    lookup: EnvLookup<'_>,
    api_key_var: &str,
    (url_var, default_url): (&str, &str),
    (model_var, default_model): (&str, &str),
) -> Result<Option<ProviderSettings>, ConfigError> {
    let Some(api_key) = optional_trimmed_env(lookup, api_key_var) else {
        return Ok(None);
    };

    Ok(Some(ProviderSettings {
        api_key,
        url: parse_http_url_env(lookup, url_var, default_url)?,
        model: optional_trimmed_env(lookup, model_var)
            .unwrap_or_else(|| default_model.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ApiConfig, ConfigError, DEFAULT_OPENROUTER_MODEL, DEFAULT_OPENROUTER_URL};

    fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ApiConfig::from_lookup(&|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]).expect("empty environment should be valid");

        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert!(config.independent_mode);
        assert_eq!(config.session_history_limit, 100);
        assert_eq!(config.upstream.timeout_ms, 5_000);
        assert!(config.upstream.openrouter.is_none());
        assert!(config.upstream.openai.is_none());
        assert!(config.upstream.anthropic.is_none());
    }

    #[test]
    fn blank_api_keys_leave_providers_disabled() {
        let config = config_from(&[("OPENROUTER_API_KEY", "   "), ("OPENAI_API_KEY", "")])
            .expect("blank keys should be accepted");

        assert!(config.upstream.openrouter.is_none());
        assert!(config.upstream.openai.is_none());
    }

    #[test]
    fn configured_keys_enable_only_their_providers() {
        let config = config_from(&[
            ("ANTHROPIC_API_KEY", "anthropic-key"),
            ("OPENROUTER_API_KEY", "openrouter-key"),
        ])
        .expect("keys should parse");

        assert!(config.upstream.openai.is_none());
        let anthropic = config.upstream.anthropic.expect("anthropic configured");
        assert_eq!(anthropic.api_key, "anthropic-key");
        let openrouter = config.upstream.openrouter.expect("openrouter configured");
        assert_eq!(openrouter.url, DEFAULT_OPENROUTER_URL);
        assert_eq!(openrouter.model, DEFAULT_OPENROUTER_MODEL);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            config_from(&[("INDEPENDENT_MODE", "maybe")]),
            Err(ConfigError::ParseBool(_))
        ));
        assert!(matches!(
            config_from(&[("UPSTREAM_TIMEOUT_MS", "soon")]),
            Err(ConfigError::ParseInt { .. })
        ));
        assert!(matches!(
            config_from(&[("SESSION_HISTORY_LIMIT", "0")]),
            Err(ConfigError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            config_from(&[
                ("OPENAI_API_KEY", "key"),
                ("OPENAI_CHAT_COMPLETIONS_URL", "ftp://example.com")
            ]),
            Err(ConfigError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn debug_output_redacts_api_keys() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-very-secret")]).expect("valid config");
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
