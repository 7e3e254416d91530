//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Default name of the output shape sent to the provider
pub const DEFAULT_SCHEMA_NAME: &str = "form_fields";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// List the fields (kind, options, description) in the prompt
    pub include_field_hints: bool,

    /// Name of the output shape (letters, digits, `_` and `-`, max 64)
    pub schema_name: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            include_field_hints: true,
            schema_name: DEFAULT_SCHEMA_NAME.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Prompt carries only the text and instructions; field hints travel
    /// in the schema alone
    pub fn minimal() -> Self {
        Self {
            include_field_hints: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        let name = &self.schema_name;
        if name.is_empty() || name.len() > 64 {
            return Err(ExtractorError::Config(
                "schema_name must be 1-64 characters".to_string(),
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ExtractorError::Config(format!(
                "schema_name '{}' may only contain letters, digits, '_' and '-'",
                name
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
