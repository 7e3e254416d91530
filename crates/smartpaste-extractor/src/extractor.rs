//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::prompt::PromptBuilder;
use smartpaste_domain::{ExtractionResult, FieldDescriptor, StructuredGenerator, StructuredRequest};
use smartpaste_schema::CompiledSchema;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The Extractor turns pasted text into a validated form record
///
/// Each call is independent: one schema compilation, one model call, one
/// validation pass. Nothing is cached between calls.
pub struct Extractor {
    generator: Arc<dyn StructuredGenerator>,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new<G>(generator: G, config: ExtractorConfig) -> Self
    where
        G: StructuredGenerator + 'static,
    {
        Self::from_shared(Arc::new(generator), config)
    }

    /// Create an Extractor over an already shared generator
    pub fn from_shared(generator: Arc<dyn StructuredGenerator>, config: ExtractorConfig) -> Self {
        Self { generator, config }
    }

    /// Name of the model behind the generator
    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Get the extractor configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract form values from `text`
    ///
    /// The result holds only keys named by `fields`, in descriptor order.
    /// Fields the model left out are absent from the result.
    ///
    /// # Errors
    ///
    /// - [`ExtractorError::Schema`] if the descriptors are malformed (the
    ///   model is not called)
    /// - [`ExtractorError::Generation`] if the model call fails
    /// - [`ExtractorError::Validation`] if the model output does not conform
    pub async fn extract(
        &self,
        text: &str,
        fields: &[FieldDescriptor],
    ) -> Result<ExtractionResult, ExtractorError> {
        self.config.validate()?;
        let schema = CompiledSchema::compile(fields)?;

        info!(
            "Starting extraction of {} fields from text length {}",
            schema.len(),
            text.len()
        );

        let builder = PromptBuilder::new(text);
        let builder = if self.config.include_field_hints {
            builder.with_field_hints(&schema)
        } else {
            builder
        };
        let prompt = builder.build();

        debug!("Prompt length: {} chars", prompt.len());

        let request = StructuredRequest::new(
            prompt,
            self.config.schema_name.clone(),
            schema.to_json_schema(),
        );
        let object = self.generator.generate_object(&request).await?;

        debug!("Model output: {}", object);

        let result = schema.validate(&object).map_err(|e| {
            warn!("Model output failed validation: {}", e);
            e
        })?;

        info!(
            "Extraction complete: {} of {} fields populated",
            result.populated(),
            schema.len()
        );

        Ok(result)
    }
}
