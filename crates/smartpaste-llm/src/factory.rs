//! Factory for creating structured-generation providers from configuration

use crate::config::{LlmConfig, ProviderKind};
use crate::{MockProvider, OllamaProvider, OpenAiProvider};
use serde_json::json;
use smartpaste_domain::{LlmError, StructuredGenerator};
use std::sync::Arc;
use tracing::info;

/// Create a provider from configuration
///
/// Hosted providers read their credential from the environment variable
/// named by `api_key_env`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the credential is
/// missing.
pub fn build_generator(config: &LlmConfig) -> Result<Arc<dyn StructuredGenerator>, LlmError> {
    config.validate()?;

    let generator: Arc<dyn StructuredGenerator> = match config.provider {
        ProviderKind::OpenAi => {
            let api_key = read_credential(&config.api_key_env)?;
            let mut provider = OpenAiProvider::new(api_key, config.model.clone());
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            if let Some(temperature) = config.temperature {
                provider = provider.with_temperature(temperature);
            }
            if let Some(timeout) = config.request_timeout() {
                provider = provider.with_timeout(timeout)?;
            }
            Arc::new(provider)
        }
        ProviderKind::Ollama => {
            let mut provider = match &config.base_url {
                Some(endpoint) => OllamaProvider::new(endpoint.clone(), config.model.clone()),
                None => OllamaProvider::default_endpoint(config.model.clone()),
            };
            if let Some(temperature) = config.temperature {
                provider = provider.with_temperature(temperature);
            }
            if let Some(timeout) = config.request_timeout() {
                provider = provider.with_timeout(timeout)?;
            }
            Arc::new(provider)
        }
        ProviderKind::Mock => {
            Arc::new(MockProvider::new(json!({})).with_model_name(config.model.clone()))
        }
    };

    info!(
        "Using {} provider with model '{}'",
        config.provider.as_str(),
        generator.model_name()
    );

    Ok(generator)
}

fn read_credential(var: &str) -> Result<String, LlmError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(LlmError::MissingCredential(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mock() {
        let generator = build_generator(&LlmConfig::mock()).unwrap();
        assert_eq!(generator.model_name(), "mock");
    }

    #[test]
    fn test_build_ollama_without_credential() {
        let mut config = LlmConfig::ollama("llama3");
        config.api_key_env = "SMARTPASTE_TEST_UNSET_OLLAMA_KEY".to_string();
        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.model_name(), "llama3");
    }

    #[test]
    fn test_missing_credential() {
        let mut config = LlmConfig::default();
        config.api_key_env = "SMARTPASTE_TEST_DEFINITELY_UNSET".to_string();

        let result = build_generator(&config);
        assert!(matches!(
            result,
            Err(LlmError::MissingCredential(ref var)) if var == "SMARTPASTE_TEST_DEFINITELY_UNSET"
        ));
    }

    #[test]
    fn test_credential_from_env() {
        std::env::set_var("SMARTPASTE_TEST_FACTORY_KEY", "sk-test");
        let mut config = LlmConfig::default();
        config.api_key_env = "SMARTPASTE_TEST_FACTORY_KEY".to_string();
        config.request_timeout_secs = Some(10);

        let generator = build_generator(&config).unwrap();
        assert_eq!(generator.model_name(), "gpt-4-turbo");
    }

    #[test]
    fn test_invalid_config_rejected_before_credential_lookup() {
        let mut config = LlmConfig::default();
        config.model = String::new();
        assert!(matches!(build_generator(&config), Err(LlmError::Config(_))));
    }
}
