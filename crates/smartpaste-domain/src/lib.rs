//! Smart Paste Domain Layer
//!
//! Core vocabulary shared by every other crate in the workspace. It defines
//! the caller-facing form model and the single outbound seam to a model
//! provider; all behavior lives in the layers above.
//!
//! ## Key Concepts
//!
//! - **Field Descriptor**: one extractable form field, either a plain field
//!   with a declared type or a choice field with a fixed option list
//! - **Form Value**: a value a field can take after extraction
//! - **Extraction Result**: ordered mapping of field name to form value
//! - **Structured Generator**: "produce a JSON object for this prompt and
//!   this schema", implemented by the provider layer (smartpaste-llm)
//!
//! ## Architecture
//!
//! - No I/O and no runtime dependencies beyond serialization
//! - Trait definitions for all external interactions
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use error::LlmError;
pub use field::{ChoiceField, FieldDescriptor, FieldKind, PlainField};
pub use traits::{StructuredGenerator, StructuredRequest};
pub use value::{ExtractionResult, FormValue};
