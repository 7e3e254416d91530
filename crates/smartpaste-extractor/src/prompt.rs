//! LLM prompt construction for form extraction

use smartpaste_schema::{CompiledSchema, FieldValidator};

/// Builds the extraction prompt
pub struct PromptBuilder<'a> {
    text: &'a str,
    schema: Option<&'a CompiledSchema>,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for the given input text
    pub fn new(text: &'a str) -> Self {
        Self { text, schema: None }
    }

    /// List the schema's fields in the prompt
    pub fn with_field_hints(mut self, schema: &'a CompiledSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task and the text, verbatim between delimiters
        prompt.push_str("Given the following unstructured text:\n\n");
        prompt.push_str(TEXT_DELIMITER);
        prompt.push('\n');
        prompt.push_str(self.text);
        prompt.push('\n');
        prompt.push_str(TEXT_DELIMITER);
        prompt.push_str("\n\n");

        // 2. Extraction rules
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 3. Field hints (if any)
        if let Some(schema) = self.schema.filter(|s| !s.is_empty()) {
            prompt.push_str("Fields:\n");
            for (name, field) in schema.fields() {
                prompt.push_str(&format!("- {} ({})", name, describe(&field.validator)));
                if let Some(description) = &field.description {
                    prompt.push_str(": ");
                    prompt.push_str(description);
                }
                prompt.push('\n');
            }
            prompt.push('\n');
        }

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

fn describe(validator: &FieldValidator) -> String {
    match validator {
        FieldValidator::Choice(options) => format!("{}: {}", validator.label(), options.join(", ")),
        other => other.label().to_string(),
    }
}

const TEXT_DELIMITER: &str = r#"""""#;

const EXTRACTION_INSTRUCTIONS: &str = "Extract the fields as a JSON object. \
    If you do not have enough information to fill out part of the object, \
    leave it as undefined. Do not guess or invent values.";

const OUTPUT_FORMAT_REMINDER: &str =
    "Only output a valid JSON object. Do not include explanation or comments.";

#[cfg(test)]
mod tests {
    use super::*;
    use smartpaste_domain::FieldDescriptor;

    fn schema() -> CompiledSchema {
        CompiledSchema::compile(&[
            FieldDescriptor::plain("email", "email"),
            FieldDescriptor::choice("plan", "text", ["basic", "pro"]),
            FieldDescriptor::plain("seats", "number").with_description("Number of licenses"),
        ])
        .unwrap()
    }

    #[test]
    fn test_prompt_embeds_text_between_delimiters() {
        let prompt = PromptBuilder::new("Alice works at Acme Corp").build();
        assert!(prompt.contains("\"\"\"\nAlice works at Acme Corp\n\"\"\""));
        assert!(prompt.starts_with("Given the following unstructured text:"));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = PromptBuilder::new("Test text").build();
        assert!(prompt.contains("Extract the fields as a JSON object"));
        assert!(prompt.contains("leave it as undefined"));
        assert!(prompt.ends_with("Do not include explanation or comments."));
    }

    #[test]
    fn test_prompt_without_hints_has_no_field_section() {
        let prompt = PromptBuilder::new("Test text").build();
        assert!(!prompt.contains("Fields:"));
    }

    #[test]
    fn test_prompt_lists_fields() {
        let schema = schema();
        let prompt = PromptBuilder::new("Test text").with_field_hints(&schema).build();

        assert!(prompt.contains("Fields:\n- email (email)\n"));
        assert!(prompt.contains("- plan (one of: basic, pro)\n"));
        assert!(prompt.contains("- seats (number): Number of licenses\n"));
    }

    #[test]
    fn test_text_comes_before_fields() {
        let schema = schema();
        let prompt = PromptBuilder::new("UNIQUE-INPUT").with_field_hints(&schema).build();

        let text_at = prompt.find("UNIQUE-INPUT").unwrap();
        let fields_at = prompt.find("Fields:").unwrap();
        assert!(text_at < fields_at);
    }
}
