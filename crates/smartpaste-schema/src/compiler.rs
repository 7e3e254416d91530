//! Form-to-schema compilation and object validation

use crate::validator::json_type;
use crate::{FieldIssue, FieldValidator, SchemaError, ValidationError};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use smartpaste_domain::{ExtractionResult, FieldDescriptor, FormValue};
use tracing::debug;

/// A compiled field: validator plus optional hint for the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledField {
    /// Validator selected for the field
    pub validator: FieldValidator,

    /// Description surfaced to the model
    pub description: Option<String>,
}

impl CompiledField {
    /// JSON Schema fragment, annotated with the description
    pub fn json_schema(&self) -> Value {
        let mut schema = self.validator.json_schema();
        if let (Some(description), Value::Object(map)) = (&self.description, &mut schema) {
            map.insert("description".to_string(), Value::String(description.clone()));
        }
        schema
    }
}

/// Incrementally assembles a [`CompiledSchema`]
///
/// Rejects empty names, duplicate names and choice fields without options.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: IndexMap<String, CompiledField>,
}

impl SchemaBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one descriptor
    pub fn add(&mut self, descriptor: &FieldDescriptor) -> Result<&mut Self, SchemaError> {
        let name = descriptor.name();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }
        if self.fields.contains_key(name) {
            return Err(SchemaError::DuplicateField(name.to_string()));
        }
        if descriptor.options().is_some_and(|options| options.is_empty()) {
            return Err(SchemaError::EmptyOptions(name.to_string()));
        }

        let field = CompiledField {
            validator: FieldValidator::for_descriptor(descriptor),
            description: descriptor
                .description()
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };
        self.fields.insert(name.to_string(), field);
        Ok(self)
    }

    /// Finish building
    pub fn build(self) -> CompiledSchema {
        CompiledSchema {
            fields: self.fields,
        }
    }
}

/// Mapping from field name to validator, in descriptor order
///
/// Every field is optional: absence and `null` are always accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchema {
    fields: IndexMap<String, CompiledField>,
}

impl CompiledSchema {
    /// Compile a descriptor list
    pub fn compile(descriptors: &[FieldDescriptor]) -> Result<Self, SchemaError> {
        let mut builder = SchemaBuilder::new();
        for descriptor in descriptors {
            builder.add(descriptor)?;
        }
        Ok(builder.build())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field
    pub fn get(&self, name: &str) -> Option<&CompiledField> {
        self.fields.get(name)
    }

    /// Iterate over fields in descriptor order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CompiledField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Validate and coerce a model object
    ///
    /// Unknown keys are dropped. Every failing field is reported; any
    /// failure rejects the whole object.
    pub fn validate(&self, object: &Value) -> Result<ExtractionResult, ValidationError> {
        let map = object
            .as_object()
            .ok_or_else(|| ValidationError::NotAnObject(json_type(object)))?;

        for key in map.keys().filter(|key| !self.fields.contains_key(key.as_str())) {
            debug!("Dropping unknown key '{}' from model output", key);
        }

        let mut result = ExtractionResult::new();
        let mut issues = Vec::new();

        for (name, field) in &self.fields {
            match map.get(name) {
                None => {}
                Some(Value::Null) => result.insert(name.clone(), FormValue::Null),
                Some(value) => match field.validator.check(value) {
                    Ok(coerced) => result.insert(name.clone(), coerced),
                    Err(kind) => issues.push(FieldIssue {
                        field: name.clone(),
                        kind,
                    }),
                },
            }
        }

        if issues.is_empty() {
            Ok(result)
        } else {
            Err(ValidationError::Fields(issues))
        }
    }

    /// Render as a JSON Schema object with no required properties
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.json_schema()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "additionalProperties": false,
        })
    }
}
