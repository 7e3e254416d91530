//! Per-field validation and coercion

use crate::IssueKind;
use chrono::NaiveDate;
use regex::Regex;
use serde_json::{json, Value};
use smartpaste_domain::{FieldDescriptor, FieldKind, FormValue};
use std::sync::LazyLock;

// Local part: letters, digits and _ ' + - . but never ending in . or '
// Domain: dot-separated labels starting alphanumeric, alphabetic TLD of 2+
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Validator for a single field value
///
/// Closed set; every descriptor maps onto exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidator {
    /// Any string
    Text,

    /// Number, or a string that parses as a finite number
    Number,

    /// `true` or `false`
    Boolean,

    /// String with email syntax
    Email,

    /// String holding an ISO calendar date, no time component
    Date,

    /// One of a fixed list of strings
    Choice(Vec<String>),
}

impl FieldValidator {
    /// Select the validator for a descriptor
    ///
    /// Choice fields win over the declared type.
    pub fn for_descriptor(descriptor: &FieldDescriptor) -> Self {
        if let Some(options) = descriptor.options() {
            return FieldValidator::Choice(options.to_vec());
        }

        match descriptor.kind() {
            FieldKind::Number => FieldValidator::Number,
            FieldKind::Checkbox => FieldValidator::Boolean,
            FieldKind::Email => FieldValidator::Email,
            FieldKind::Date => FieldValidator::Date,
            FieldKind::Text => FieldValidator::Text,
        }
    }

    /// Short label used in prompts and logs
    pub fn label(&self) -> &'static str {
        match self {
            FieldValidator::Text => "text",
            FieldValidator::Number => "number",
            FieldValidator::Boolean => "boolean",
            FieldValidator::Email => "email",
            FieldValidator::Date => "date, YYYY-MM-DD",
            FieldValidator::Choice(_) => "one of",
        }
    }

    /// Check a present, non-null value and coerce it to a form value
    pub fn check(&self, value: &Value) -> Result<FormValue, IssueKind> {
        match self {
            FieldValidator::Text => expect_str(value).map(FormValue::from),
            FieldValidator::Number => coerce_number(value).map(FormValue::Number),
            FieldValidator::Boolean => match value {
                Value::Bool(b) => Ok(FormValue::Bool(*b)),
                other => Err(IssueKind::ExpectedBoolean(json_type(other))),
            },
            FieldValidator::Email => {
                let s = expect_str(value)?;
                if is_email(s) {
                    Ok(FormValue::from(s))
                } else {
                    Err(IssueKind::InvalidEmail(s.to_string()))
                }
            }
            FieldValidator::Date => {
                let s = expect_str(value)?;
                if is_iso_date(s) {
                    Ok(FormValue::from(s))
                } else {
                    Err(IssueKind::InvalidDate(s.to_string()))
                }
            }
            FieldValidator::Choice(options) => {
                let s = expect_str(value)?;
                if options.iter().any(|option| option == s) {
                    Ok(FormValue::from(s))
                } else {
                    Err(IssueKind::NotAnOption {
                        value: s.to_string(),
                        options: options.clone(),
                    })
                }
            }
        }
    }

    /// JSON Schema fragment for this validator (without description)
    pub fn json_schema(&self) -> Value {
        match self {
            FieldValidator::Text => json!({ "type": "string" }),
            FieldValidator::Number => json!({ "type": "number" }),
            FieldValidator::Boolean => json!({ "type": "boolean" }),
            FieldValidator::Email => json!({ "type": "string", "format": "email" }),
            FieldValidator::Date => json!({ "type": "string", "format": "date" }),
            FieldValidator::Choice(options) => json!({ "type": "string", "enum": options }),
        }
    }
}

fn expect_str(value: &Value) -> Result<&str, IssueKind> {
    value
        .as_str()
        .ok_or_else(|| IssueKind::ExpectedString(json_type(value)))
}

fn coerce_number(value: &Value) -> Result<f64, IssueKind> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| IssueKind::NotANumber(n.to_string())),
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<f64>() {
                Ok(n) if !trimmed.is_empty() && n.is_finite() => Ok(n),
                _ => Err(IssueKind::NotANumber(format!("'{}'", s))),
            }
        }
        other => Err(IssueKind::NotANumber(json_type(other).to_string())),
    }
}

fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_RE.is_match(s)
}

fn is_iso_date(s: &str) -> bool {
    DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// JSON type name for error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_descriptor_dispatch() {
        let cases = [
            ("number", FieldValidator::Number),
            ("checkbox", FieldValidator::Boolean),
            ("email", FieldValidator::Email),
            ("date", FieldValidator::Date),
            ("text", FieldValidator::Text),
            ("url", FieldValidator::Text),
        ];
        for (field_type, expected) in cases {
            let descriptor = FieldDescriptor::plain("f", field_type);
            assert_eq!(FieldValidator::for_descriptor(&descriptor), expected);
        }
    }

    #[test]
    fn test_choice_wins_over_declared_type() {
        let descriptor = FieldDescriptor::choice("f", "number", ["1", "2"]);
        assert_eq!(
            FieldValidator::for_descriptor(&descriptor),
            FieldValidator::Choice(vec!["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_number_coercion() {
        let v = FieldValidator::Number;
        assert_eq!(v.check(&json!("42")), Ok(FormValue::Number(42.0)));
        assert_eq!(v.check(&json!(" 3.5 ")), Ok(FormValue::Number(3.5)));
        assert_eq!(v.check(&json!(-7)), Ok(FormValue::Number(-7.0)));
        assert_eq!(v.check(&json!("1e3")), Ok(FormValue::Number(1000.0)));
    }

    #[test]
    fn test_number_rejections() {
        let v = FieldValidator::Number;
        assert!(v.check(&json!("forty-two")).is_err());
        assert!(v.check(&json!("")).is_err());
        assert!(v.check(&json!("   ")).is_err());
        assert!(v.check(&json!("NaN")).is_err());
        assert!(v.check(&json!("inf")).is_err());
        assert!(v.check(&json!(true)).is_err());
        assert!(v.check(&json!([1])).is_err());
    }

    #[test]
    fn test_boolean_only_accepts_booleans() {
        let v = FieldValidator::Boolean;
        assert_eq!(v.check(&json!(true)), Ok(FormValue::Bool(true)));
        assert_eq!(v.check(&json!(false)), Ok(FormValue::Bool(false)));
        assert_eq!(v.check(&json!("true")), Err(IssueKind::ExpectedBoolean("string")));
        assert_eq!(v.check(&json!(1)), Err(IssueKind::ExpectedBoolean("number")));
    }

    #[test]
    fn test_email_syntax() {
        let v = FieldValidator::Email;
        for ok in [
            "jane@example.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@example.ie",
            "a@b.io",
        ] {
            assert!(v.check(&json!(ok)).is_ok(), "{} should be accepted", ok);
        }
        for bad in [
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            ".jane@example.com",
            "ja..ne@example.com",
            "jane.@example.com",
            "jane doe@example.com",
            "jane@-example.com",
        ] {
            assert!(v.check(&json!(bad)).is_err(), "{} should be rejected", bad);
        }
        assert_eq!(v.check(&json!(5)), Err(IssueKind::ExpectedString("number")));
    }

    #[test]
    fn test_date_format() {
        let v = FieldValidator::Date;
        assert_eq!(v.check(&json!("2024-01-15")), Ok(FormValue::from("2024-01-15")));
        assert!(v.check(&json!("2024-02-29")).is_ok());
        assert!(v.check(&json!("15th January 2024")).is_err());
        assert!(v.check(&json!("2023-02-29")).is_err());
        assert!(v.check(&json!("2024-13-01")).is_err());
        assert!(v.check(&json!("2024-1-5")).is_err());
        assert!(v.check(&json!("2024-01-15T10:00:00Z")).is_err());
    }

    #[test]
    fn test_choice_membership() {
        let v = FieldValidator::Choice(vec!["basic".to_string(), "pro".to_string()]);
        assert_eq!(v.check(&json!("pro")), Ok(FormValue::from("pro")));
        assert!(v.check(&json!("Pro")).is_err());
        assert!(v.check(&json!("enterprise")).is_err());
        assert!(v.check(&json!(1)).is_err());
    }

    #[test]
    fn test_text_accepts_any_string() {
        let v = FieldValidator::Text;
        assert_eq!(v.check(&json!("")), Ok(FormValue::from("")));
        assert_eq!(v.check(&json!("anything")), Ok(FormValue::from("anything")));
        assert!(v.check(&json!(12)).is_err());
    }

    #[test]
    fn test_json_schema_fragments() {
        assert_eq!(FieldValidator::Number.json_schema(), json!({"type": "number"}));
        assert_eq!(
            FieldValidator::Date.json_schema(),
            json!({"type": "string", "format": "date"})
        );
        assert_eq!(
            FieldValidator::Choice(vec!["a".to_string()]).json_schema(),
            json!({"type": "string", "enum": ["a"]})
        );
    }
}
