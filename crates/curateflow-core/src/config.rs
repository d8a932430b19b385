use std::time::Duration;

use crate::error::{CurateError, Result};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Older variable name, still honored as a fallback
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";
pub const MODEL_ENV: &str = "CURATEFLOW_MODEL";
pub const BASE_URL_ENV: &str = "CURATEFLOW_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the Gemini backend.
///
/// Built once and handed to the client; nothing downstream reads the
/// environment. A missing key is allowed here and reported on every call.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: non_blank(api_key.into()),
            ..Self::default()
        }
    }

    /// Read the key and optional overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_ENV)
            .and_then(non_blank)
            .or_else(|| lookup(LEGACY_API_KEY_ENV).and_then(non_blank));
        let defaults = Self::default();

        Self {
            api_key,
            model: lookup(MODEL_ENV)
                .and_then(non_blank)
                .unwrap_or(defaults.model),
            base_url: lookup(BASE_URL_ENV)
                .and_then(non_blank)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate that the API key is set
    pub fn validate_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| CurateError::Configuration {
                env_var: API_KEY_ENV.to_string(),
            })
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_reads_primary_key() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "primary"),
            (LEGACY_API_KEY_ENV, "legacy"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_falls_back_to_legacy_key() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "   "),
            (LEGACY_API_KEY_ENV, "legacy"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let config = GeminiConfig::from_lookup(lookup_from(&[]));
        assert!(config.api_key.is_none());
        assert!(matches!(
            config.validate_api_key(),
            Err(CurateError::Configuration { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "k"),
            (MODEL_ENV, "gemini-2.5-pro"),
            (BASE_URL_ENV, "http://localhost:9999"),
        ]));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = GeminiConfig::new("k").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.validate_api_key().unwrap(), "k");
    }
}
