//! Smart Paste Extractor
//!
//! Turns pasted natural-language text into a validated form record.
//!
//! # Architecture
//!
//! ```text
//! Fields → Schema compiler ─┐
//!                           ├→ StructuredGenerator → Validation → ExtractionResult
//! Text   → Prompt builder ──┘
//! ```
//!
//! A call either yields a record that conforms to the compiled schema or
//! fails as a whole. Fields the text says nothing about are left out.
//!
//! # Example Usage
//!
//! ```
//! use smartpaste_domain::FieldDescriptor;
//! use smartpaste_extractor::{Extractor, ExtractorConfig};
//! use smartpaste_llm::MockProvider;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(json!({"email": "jane@example.com", "plan": "pro"}));
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let fields = vec![
//!     FieldDescriptor::plain("email", "email"),
//!     FieldDescriptor::choice("plan", "text", ["basic", "pro"]),
//! ];
//! let result = extractor
//!     .extract("Contact jane@example.com about the pro plan.", &fields)
//!     .await?;
//!
//! assert_eq!(result.get("plan").and_then(|v| v.as_str()), Some("pro"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod prompt;


pub use config::{ExtractorConfig, DEFAULT_SCHEMA_NAME};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use prompt::PromptBuilder;
