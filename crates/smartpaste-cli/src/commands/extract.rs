//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{load_fields, read_text};
use smartpaste_domain::ExtractionResult;
use smartpaste_extractor::Extractor;
use smartpaste_llm::build_generator;
use tracing::debug;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, mut config: Config) -> Result<()> {
    if let Some(provider) = args.provider {
        config.llm.provider = provider.into();
    }
    if let Some(model) = args.model {
        config.llm.model = model;
    }

    let fields = load_fields(&args.fields)?;
    let text = read_text(args.text, args.file.as_deref(), std::io::stdin())?;

    debug!(
        "Resolved provider '{}' with model '{}'",
        config.llm.provider.as_str(),
        config.llm.model
    );
    let generator = build_generator(&config.llm)?;
    let extractor = Extractor::from_shared(generator, config.extractor);

    let result = extractor.extract(&text, &fields).await?;

    println!("{}", render(&result, args.pretty)?);
    Ok(())
}

/// Render a result as JSON.
pub fn render(result: &ExtractionResult, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpaste_domain::FormValue;

    #[test]
    fn test_render_keeps_field_order() {
        let mut result = ExtractionResult::new();
        result.insert("email", FormValue::from("jane@example.com"));
        result.insert("seats", FormValue::Number(12.0));
        result.insert("plan", FormValue::from("pro"));

        assert_eq!(
            render(&result, false).unwrap(),
            r#"{"email":"jane@example.com","seats":12,"plan":"pro"}"#
        );
    }

    #[test]
    fn test_render_pretty() {
        let mut result = ExtractionResult::new();
        result.insert("newsletter", FormValue::Bool(true));

        assert_eq!(render(&result, true).unwrap(), "{\n  \"newsletter\": true\n}");
    }
}
