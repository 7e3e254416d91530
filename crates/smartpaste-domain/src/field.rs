//! Field module - caller-supplied descriptions of form fields

use serde::{Deserialize, Serialize};

/// Semantic type of a plain field
///
/// The declared type string of a descriptor is mapped onto this closed set:
/// - Number: numeric value, numeric-looking strings are coerced
/// - Checkbox: boolean only
/// - Email: string with email syntax
/// - Date: ISO calendar date (`YYYY-MM-DD`)
/// - Text: any string (also the fallback for unknown type strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `"number"`
    Number,

    /// `"checkbox"`
    Checkbox,

    /// `"email"`
    Email,

    /// `"date"`
    Date,

    /// `"text"` and every unrecognized type
    Text,
}

impl FieldKind {
    /// Get the canonical type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::Text => "text",
        }
    }

    /// Map a declared type string onto a kind
    ///
    /// Matching is exact; anything outside the known set is `Text`.
    pub fn from_type(s: &str) -> Self {
        match s {
            "number" => FieldKind::Number,
            "checkbox" => FieldKind::Checkbox,
            "email" => FieldKind::Email,
            "date" => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field whose value is constrained by its declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainField {
    /// Field name (key in the extraction result)
    pub name: String,

    /// Declared type string, kept verbatim
    pub field_type: String,

    /// Optional extraction hint for the model
    pub description: Option<String>,
}

/// A field whose value must be one of a fixed list of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceField {
    /// Field name (key in the extraction result)
    pub name: String,

    /// Declared type string, kept verbatim (ignored for validation)
    pub field_type: String,

    /// Optional extraction hint for the model
    pub description: Option<String>,

    /// Accepted values, in display order
    pub options: Vec<String>,
}

/// Description of one extractable form field
///
/// A closed two-variant union: the presence of `options` in the serialized
/// form makes a field a [`ChoiceField`], otherwise it is a [`PlainField`].
///
/// ```
/// use smartpaste_domain::{FieldDescriptor, FieldKind};
///
/// let plan: FieldDescriptor = serde_json::from_str(
///     r#"{"name": "plan", "type": "text", "options": ["basic", "pro"]}"#,
/// ).unwrap();
/// assert!(plan.is_choice());
///
/// let email = FieldDescriptor::plain("email", "email").with_description("Work address");
/// assert_eq!(email.kind(), FieldKind::Email);
/// assert_eq!(email.description(), Some("Work address"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor", into = "RawDescriptor")]
pub enum FieldDescriptor {
    /// Field constrained by its declared type
    Plain(PlainField),

    /// Field constrained to a list of options
    Choice(ChoiceField),
}

impl FieldDescriptor {
    /// Create a plain field
    pub fn plain(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        FieldDescriptor::Plain(PlainField {
            name: name.into(),
            field_type: field_type.into(),
            description: None,
        })
    }

    /// Create a choice field
    pub fn choice<I, S>(name: impl Into<String>, field_type: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldDescriptor::Choice(ChoiceField {
            name: name.into(),
            field_type: field_type.into(),
            description: None,
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    /// Attach an extraction hint
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = Some(description.into());
        match &mut self {
            FieldDescriptor::Plain(field) => field.description = description,
            FieldDescriptor::Choice(field) => field.description = description,
        }
        self
    }

    /// Field name
    pub fn name(&self) -> &str {
        match self {
            FieldDescriptor::Plain(field) => &field.name,
            FieldDescriptor::Choice(field) => &field.name,
        }
    }

    /// Declared type string as supplied by the caller
    pub fn field_type(&self) -> &str {
        match self {
            FieldDescriptor::Plain(field) => &field.field_type,
            FieldDescriptor::Choice(field) => &field.field_type,
        }
    }

    /// Semantic kind derived from the declared type
    pub fn kind(&self) -> FieldKind {
        FieldKind::from_type(self.field_type())
    }

    /// Extraction hint, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            FieldDescriptor::Plain(field) => field.description.as_deref(),
            FieldDescriptor::Choice(field) => field.description.as_deref(),
        }
    }

    /// Option list for choice fields
    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldDescriptor::Plain(_) => None,
            FieldDescriptor::Choice(field) => Some(&field.options),
        }
    }

    /// Whether this is a choice field
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldDescriptor::Choice(_))
    }
}

/// Wire shape of a descriptor: `{name, type, description?, options?}`
#[derive(Serialize, Deserialize)]
struct RawDescriptor {
    name: String,
    #[serde(rename = "type", default = "default_type")]
    field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

fn default_type() -> String {
    "text".to_string()
}

impl From<RawDescriptor> for FieldDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        match raw.options {
            Some(options) => FieldDescriptor::Choice(ChoiceField {
                name: raw.name,
                field_type: raw.field_type,
                description: raw.description,
                options,
            }),
            None => FieldDescriptor::Plain(PlainField {
                name: raw.name,
                field_type: raw.field_type,
                description: raw.description,
            }),
        }
    }
}

impl From<FieldDescriptor> for RawDescriptor {
    fn from(descriptor: FieldDescriptor) -> Self {
        match descriptor {
            FieldDescriptor::Plain(field) => RawDescriptor {
                name: field.name,
                field_type: field.field_type,
                description: field.description,
                options: None,
            },
            FieldDescriptor::Choice(field) => RawDescriptor {
                name: field.name,
                field_type: field.field_type,
                description: field.description,
                options: Some(field.options),
            },
        }
    }
}
