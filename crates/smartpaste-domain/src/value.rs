//! Value module - extracted values and the extraction result

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Largest magnitude at which every integer is exactly representable in f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A value a form field can hold after extraction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Explicitly empty
    Null,

    /// Checkbox value
    Bool(bool),

    /// Coerced numeric value
    Number(f64),

    /// Free text, email, date or selected option
    Text(String),

    /// Ordered list of strings
    List(Vec<String>),
}

impl FormValue {
    /// Convert to a JSON value
    ///
    /// Integral numbers become JSON integers; non-finite numbers become null.
    pub fn to_json(&self) -> Value {
        match self {
            FormValue::Null => Value::Null,
            FormValue::Bool(b) => Value::Bool(*b),
            FormValue::Number(n) => number_to_json(*n),
            FormValue::Text(s) => Value::String(s.clone()),
            FormValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// Get the string value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean value, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl Serialize for FormValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormValue::Null => serializer.serialize_unit(),
            FormValue::Bool(b) => serializer.serialize_bool(*b),
            FormValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FormValue::Number(n) => serializer.serialize_f64(*n),
            FormValue::Text(s) => serializer.serialize_str(s),
            FormValue::List(items) => items.serialize(serializer),
        }
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Bool(b)
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(items: Vec<String>) -> Self {
        FormValue::List(items)
    }
}

/// Validated mapping of field name to extracted value
///
/// Keys keep descriptor order. Any field may be missing; keys never fall
/// outside the descriptor list the result was validated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    values: IndexMap<String, FormValue>,
}

impl ExtractionResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a field
    pub fn insert(&mut self, name: impl Into<String>, value: FormValue) {
        self.values.insert(name.into(), value);
    }

    /// Get the value for a field
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.values.get(name)
    }

    /// Whether a field is present (null values count as present)
    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of present fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields holding a non-null value
    pub fn populated(&self) -> usize {
        self.values.values().filter(|v| !v.is_null()).count()
    }

    /// Iterate over fields in descriptor order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in descriptor order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Convert to a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }

    /// Consume into the underlying ordered map
    pub fn into_inner(self) -> IndexMap<String, FormValue> {
        self.values
    }
}

impl FromIterator<(String, FormValue)> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = (String, FormValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_number_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&FormValue::Number(42.0)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&FormValue::Number(-3.0)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&FormValue::Number(2.5)).unwrap(), "2.5");
        assert_eq!(FormValue::Number(42.0).to_json(), json!(42));
    }

    #[test]
    fn test_deserialize_each_shape() {
        let values: Vec<FormValue> =
            serde_json::from_str(r#"[null, true, 7, 1.5, "pro", ["a", "b"]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FormValue::Null,
                FormValue::Bool(true),
                FormValue::Number(7.0),
                FormValue::Number(1.5),
                FormValue::Text("pro".to_string()),
                FormValue::List(vec!["a".to_string(), "b".to_string()]),
            ]
        );
    }

    #[test]
    fn test_objects_are_not_form_values() {
        let result: Result<FormValue, _> = serde_json::from_str(r#"{"a": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_result_keeps_insertion_order() {
        let mut result = ExtractionResult::new();
        result.insert("zeta", FormValue::from("z"));
        result.insert("alpha", FormValue::from(true));
        result.insert("mid", FormValue::Null);

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"zeta":"z","alpha":true,"mid":null}"#
        );
        assert_eq!(result.len(), 3);
        assert_eq!(result.populated(), 2);
    }

    #[test]
    fn test_result_to_json() {
        let result: ExtractionResult = vec![
            ("email".to_string(), FormValue::from("jane@example.com")),
            ("seats".to_string(), FormValue::from(5.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(result.to_json(), json!({"email": "jane@example.com", "seats": 5}));
        assert_eq!(result.get("seats").and_then(FormValue::as_f64), Some(5.0));
        assert!(!result.contains_key("plan"));
    }
}
