//! Smart Paste LLM Provider Layer
//!
//! Pluggable structured-generation providers.
//!
//! # Architecture
//!
//! This crate provides implementations of the `StructuredGenerator` trait from
//! `smartpaste-domain`. Each provider performs one request per call and hands
//! back the decoded JSON object; schema validation happens in the caller.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: Hosted OpenAI chat completions with JSON-schema output
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use smartpaste_llm::MockProvider;
//! use smartpaste_domain::{StructuredGenerator, StructuredRequest};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new(json!({"email": "jane@example.com"}));
//! let request = StructuredRequest::new("prompt", "form", json!({"type": "object"}));
//! let object = provider.generate_object(&request).await.unwrap();
//! assert_eq!(object["email"], "jane@example.com");
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod factory;
pub mod json;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use serde_json::{json, Value};
use smartpaste_domain::{StructuredGenerator, StructuredRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

pub use config::{LlmConfig, ProviderKind};
pub use factory::build_generator;
pub use json::parse_json_object;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use smartpaste_domain::LlmError;

/// Canned reply of the mock provider
#[derive(Debug, Clone)]
enum MockReply {
    Object(Value),
    Error(String),
}

/// Mock provider for deterministic testing
///
/// Returns pre-configured objects without making any network calls. Replies
/// can be keyed on a prompt fragment: the first registered fragment contained
/// in the prompt wins, otherwise the default reply is used.
///
/// # Examples
///
/// ```
/// use smartpaste_llm::MockProvider;
/// use serde_json::json;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("pro plan", json!({"plan": "pro"}));
/// provider.add_error("outage", "service unavailable");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    model: String,
    replies: Arc<Mutex<Vec<(String, MockReply)>>>,
    last_request: Arc<Mutex<Option<StructuredRequest>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a MockProvider returning the same object for all prompts
    pub fn new(object: Value) -> Self {
        Self::with_default(MockReply::Object(object))
    }

    /// Create a MockProvider failing every call with a provider error
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Error(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            model: "mock".to_string(),
            replies: Arc::new(Mutex::new(Vec::new())),
            last_request: Arc::new(Mutex::new(None)),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the reported model name
    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Reply with `object` when the prompt contains `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, object: Value) {
        lock(&self.replies).push((fragment.into(), MockReply::Object(object)));
    }

    /// Fail when the prompt contains `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>, message: impl Into<String>) {
        lock(&self.replies).push((fragment.into(), MockReply::Error(message.into())));
    }

    /// Get the number of times generate_object was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<StructuredRequest> {
        lock(&self.last_request).clone()
    }

    fn reply_for(&self, prompt: &str) -> MockReply {
        lock(&self.replies)
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(json!({}))
    }
}

#[async_trait]
impl StructuredGenerator for MockProvider {
    async fn generate_object(&self, request: &StructuredRequest) -> Result<Value, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *lock(&self.last_request) = Some(request.clone());

        match self.reply_for(&request.prompt) {
            MockReply::Object(object) => Ok(object),
            MockReply::Error(message) => Err(LlmError::Other(message)),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// Mock state stays usable after a panicking test thread
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
