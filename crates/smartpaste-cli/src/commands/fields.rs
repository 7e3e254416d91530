//! Fields command implementation.

use crate::cli::FieldsArgs;
use crate::error::Result;
use crate::input::load_fields;
use smartpaste_schema::CompiledSchema;

/// Execute the fields command.
///
/// Compiles the descriptors and prints the resulting JSON Schema. No model
/// is called.
pub fn execute_fields(args: FieldsArgs) -> Result<()> {
    let fields = load_fields(&args.fields)?;
    let schema = CompiledSchema::compile(&fields)?;

    println!("{}", serde_json::to_string_pretty(&schema.to_json_schema())?);
    Ok(())
}
