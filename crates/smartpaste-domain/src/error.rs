//! Errors raised by structured-generation providers

use thiserror::Error;

/// Errors that can occur during a model call
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Provider answered with a non-success status
    #[error("Provider error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider-supplied message
        message: String,
    },

    /// Credential rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Response did not contain a usable JSON object
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credential environment variable not set
    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    /// Provider configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}
