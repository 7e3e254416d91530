//! Configuration for structured-generation providers

use serde::{Deserialize, Serialize};
use smartpaste_domain::LlmError;
use std::time::Duration;

/// Default hosted model
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Default environment variable holding the provider credential
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Which provider answers extraction requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions (hosted)
    #[default]
    OpenAi,
    /// Local Ollama server
    Ollama,
    /// Deterministic mock, no network
    Mock,
}

impl ProviderKind {
    /// Get the provider name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
            ProviderKind::Mock => "mock",
        }
    }

    /// Whether the provider needs a credential
    pub fn requires_credential(&self) -> bool {
        matches!(self, ProviderKind::OpenAi)
    }
}

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider to use
    pub provider: ProviderKind,

    /// Model identifier
    pub model: String,

    /// Override of the provider's API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Environment variable the credential is read from
    pub api_key_env: String,

    /// Sampling temperature (0.0-2.0), provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// HTTP client timeout (seconds); no timeout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            temperature: None,
            request_timeout_secs: None,
        }
    }
}

impl LlmConfig {
    /// Local Ollama preset
    pub fn ollama(model: impl Into<String>) -> Self {
        Self {
            provider: ProviderKind::Ollama,
            model: model.into(),
            ..Self::default()
        }
    }

    /// Mock preset (no network, empty objects)
    pub fn mock() -> Self {
        Self {
            provider: ProviderKind::Mock,
            model: "mock".to_string(),
            ..Self::default()
        }
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.model.trim().is_empty() {
            return Err(LlmError::Config("model must not be empty".to_string()));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(LlmError::Config(format!(
                    "temperature {} out of range [0.0, 2.0]",
                    temperature
                )));
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(LlmError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.provider.requires_credential() && self.api_key_env.trim().is_empty() {
            return Err(LlmError::Config("api_key_env must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LlmError> {
        toml::from_str(toml_str)
            .map_err(|e| LlmError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, LlmError> {
        toml::to_string_pretty(self)
            .map_err(|e| LlmError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LlmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(LlmConfig::ollama("llama3").validate().is_ok());
        assert!(LlmConfig::mock().validate().is_ok());
    }

    #[test]
    fn test_invalid_model() {
        let mut config = LlmConfig::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let mut config = LlmConfig::default();
        config.temperature = Some(2.5);
        assert!(config.validate().is_err());
        config.temperature = Some(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = LlmConfig::default();
        config.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());
        config.request_timeout_secs = Some(30);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LlmConfig::from_toml(
            r#"
            provider = "ollama"
            model = "llama3"
            base_url = "http://gpu-box:11434"
            "#,
        )
        .unwrap();

        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.model, "llama3");
        assert_eq!(config.base_url.as_deref(), Some("http://gpu-box:11434"));
        assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(LlmConfig::from_toml(r#"provider = "carrier-pigeon""#).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = LlmConfig::default();
        config.temperature = Some(0.2);
        config.request_timeout_secs = Some(60);

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains(r#"provider = "openai""#));
        assert_eq!(LlmConfig::from_toml(&toml_str).unwrap(), config);
    }
}
