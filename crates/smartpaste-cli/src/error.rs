//! Error types for the CLI application.

use smartpaste_extractor::ExtractorError;
use smartpaste_llm::LlmError;
use smartpaste_schema::SchemaError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Extraction failed
    #[error("{0}")]
    Extractor(#[from] ExtractorError),

    /// Provider could not be built
    #[error("Provider error: {0}")]
    Llm(#[from] LlmError),

    /// Field descriptors could not be compiled
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
