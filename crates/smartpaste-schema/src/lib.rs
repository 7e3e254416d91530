//! Smart Paste Schema
//!
//! Compiles caller-supplied field descriptors into a validation schema and
//! checks model output against it.
//!
//! The compiler provides:
//! - One validator per field, drawn from a closed set (text, number,
//!   boolean, email, date, choice)
//! - Compile-time rejection of malformed descriptor lists
//! - Validation and coercion of a model's JSON object
//! - A JSON Schema rendering to hand to structured-generation providers
//!
//! # Examples
//!
//! ```
//! use smartpaste_domain::{FieldDescriptor, FormValue};
//! use smartpaste_schema::CompiledSchema;
//! use serde_json::json;
//!
//! let fields = vec![
//!     FieldDescriptor::plain("seats", "number"),
//!     FieldDescriptor::choice("plan", "text", ["basic", "pro"]),
//! ];
//! let schema = CompiledSchema::compile(&fields).unwrap();
//!
//! let result = schema.validate(&json!({"seats": "42", "plan": "pro"})).unwrap();
//! assert_eq!(result.get("seats"), Some(&FormValue::Number(42.0)));
//! assert_eq!(result.get("plan"), Some(&FormValue::from("pro")));
//!
//! assert!(schema.validate(&json!({"plan": "enterprise"})).is_err());
//! ```

#![warn(missing_docs)]

mod compiler;
mod error;
mod validator;

pub use compiler::{CompiledField, CompiledSchema, SchemaBuilder};
pub use error::{FieldIssue, IssueKind, SchemaError, ValidationError};
pub use validator::FieldValidator;
