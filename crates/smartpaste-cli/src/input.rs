//! Reading field descriptors and input text.

use crate::error::{CliError, Result};
use smartpaste_domain::FieldDescriptor;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a JSON array of field descriptors.
pub fn load_fields(path: &Path) -> Result<Vec<FieldDescriptor>> {
    let contents = fs::read_to_string(path)?;
    parse_fields(&contents)
}

/// Parse a JSON array of field descriptors.
pub fn parse_fields(json: &str) -> Result<Vec<FieldDescriptor>> {
    let fields: Vec<FieldDescriptor> = serde_json::from_str(json)?;
    Ok(fields)
}

/// Resolve the input text from `--text`, `--file`, or `reader`.
pub fn read_text<R: Read>(
    text: Option<String>,
    file: Option<&Path>,
    mut reader: R,
) -> Result<String> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("No text to extract from".to_string()));
    }
    Ok(text)
}
