//! OpenAI Provider Implementation
//!
//! Structured generation against the OpenAI chat completions API using a
//! `json_schema` response format.
//!
//! # Examples
//!
//! ```no_run
//! use smartpaste_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-4-turbo").with_temperature(0.0);
//! ```

use crate::json::parse_json_object;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smartpaste_domain::{LlmError, StructuredGenerator, StructuredRequest};
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI provider (GPT-4 Turbo, GPT-4o, ...)
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    schema: &'a Value,
    strict: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: OpenAI API key
    /// - `model`: Model name (e.g., "gpt-4-turbo", "gpt-4o")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
        }
    }

    /// Use a custom base URL (Azure OpenAI or compatible APIs)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Bound each request with a client-side timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn status_error(&self, status: StatusCode, body: &str) -> LlmError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication(message),
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(self.model.clone()),
            _ => LlmError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl StructuredGenerator for OpenAiProvider {
    async fn generate_object(&self, request: &StructuredRequest) -> Result<Value, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: &request.schema_name,
                    schema: &request.schema,
                    // Strict mode demands every property be required
                    strict: false,
                },
            },
            temperature: self.temperature,
        };

        debug!("POST {} (model {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(self.status_error(status, &text));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let message = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))?;

        if let Some(refusal) = message.refusal {
            return Err(LlmError::InvalidResponse(format!("Model refused: {}", refusal)));
        }

        let content = message
            .content
            .ok_or_else(|| LlmError::InvalidResponse("Response had no content".to_string()))?;

        parse_json_object(&content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_provider_creation() {
        let provider = OpenAiProvider::new("key", "gpt-4-turbo");
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
        assert_eq!(provider.model_name(), "gpt-4-turbo");
        assert_eq!(provider.temperature, None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = OpenAiProvider::new("key", "m").with_base_url("http://localhost:8000/v1/");
        assert_eq!(provider.base_url(), "http://localhost:8000/v1");
    }

    #[test]
    fn test_status_error_mapping() {
        let provider = OpenAiProvider::new("key", "gpt-4-turbo");
        let body = serde_json::json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })
        .to_string();

        assert!(matches!(
            provider.status_error(StatusCode::UNAUTHORIZED, &body),
            LlmError::Authentication(ref m) if m == "Incorrect API key provided"
        ));
        assert!(matches!(
            provider.status_error(StatusCode::TOO_MANY_REQUESTS, &body),
            LlmError::RateLimitExceeded
        ));
        assert!(matches!(
            provider.status_error(StatusCode::NOT_FOUND, &body),
            LlmError::ModelNotAvailable(ref m) if m == "gpt-4-turbo"
        ));
        assert!(matches!(
            provider.status_error(StatusCode::BAD_GATEWAY, "upstream down"),
            LlmError::Api { status: 502, ref message } if message == "upstream down"
        ));
    }
}
