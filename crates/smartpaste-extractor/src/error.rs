//! Error types for the Extractor

use smartpaste_domain::LlmError;
use smartpaste_schema::{SchemaError, ValidationError};
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Extraction is all-or-nothing: every variant means no result was produced.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Field descriptors could not be compiled
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The model call failed (network, provider, authentication)
    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    /// Model output does not conform to the compiled schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
