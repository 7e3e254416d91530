//! Trait definitions for external interactions
//!
//! These traits define the boundary between extraction logic and the model
//! provider. Implementations live in smartpaste-llm.

use crate::LlmError;
use async_trait::async_trait;
use serde_json::Value;

/// A request for a JSON object conforming to a schema
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRequest {
    /// Full prompt text
    pub prompt: String,

    /// Short identifier for the output shape (some providers require one)
    pub schema_name: String,

    /// JSON Schema the output object must satisfy
    pub schema: Value,
}

impl StructuredRequest {
    /// Create a request
    pub fn new(prompt: impl Into<String>, schema_name: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            schema_name: schema_name.into(),
            schema,
        }
    }
}

/// Structured-generation capability of a model provider
///
/// One operation: "generate an object conforming to schema S given prompt P".
/// Implementations perform a single request-response; retry, timeout and
/// rate-limit behavior belong to the implementation, not to callers.
///
/// Implemented by the infrastructure layer (smartpaste-llm)
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    /// Generate a JSON object for the request
    ///
    /// The returned value is the provider's decoded output; callers still
    /// validate it against their own schema.
    async fn generate_object(&self, request: &StructuredRequest) -> Result<Value, LlmError>;

    /// Identifier of the model answering requests
    fn model_name(&self) -> &str;
}
