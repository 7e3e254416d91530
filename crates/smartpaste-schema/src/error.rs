//! Schema error types

use thiserror::Error;

/// Errors raised while compiling descriptors into a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A descriptor has an empty name
    #[error("Field name must not be empty")]
    EmptyFieldName,

    /// Two descriptors share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A choice field has no options
    #[error("Choice field '{0}' has an empty option list")]
    EmptyOptions(String),
}

/// Why a single field value was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// Expected a JSON string
    #[error("expected a string, got {0}")]
    ExpectedString(&'static str),

    /// Expected a JSON boolean
    #[error("expected a boolean, got {0}")]
    ExpectedBoolean(&'static str),

    /// Value could not be coerced to a number
    #[error("expected a number, got {0}")]
    NotANumber(String),

    /// String is not an email address
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// String is not an ISO calendar date
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// String is not one of the allowed options
    #[error("'{value}' is not one of [{}]", .options.join(", "))]
    NotAnOption {
        /// Rejected value
        value: String,
        /// Allowed values
        options: Vec<String>,
    },
}

/// A rejected field in a validated object
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {kind}")]
pub struct FieldIssue {
    /// Field name
    pub field: String,

    /// Reason for rejection
    pub kind: IssueKind,
}

/// Errors raised while validating model output against a schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Output is not a JSON object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// One or more fields failed validation
    #[error("Invalid fields: {}", format_issues(.0))]
    Fields(Vec<FieldIssue>),
}

impl ValidationError {
    /// Field-level issues, empty for structural errors
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ValidationError::NotAnObject(_) => &[],
            ValidationError::Fields(issues) => issues,
        }
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
