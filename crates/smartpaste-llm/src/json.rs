//! Recover a JSON object from raw model text

use serde_json::Value;
use smartpaste_domain::LlmError;

/// Parse model output into a JSON object
///
/// Models sometimes wrap JSON in Markdown code fences or surround it with
/// prose despite instructions. The fence is stripped first; if the text still
/// does not parse, the outermost `{ ... }` span is tried.
pub fn parse_json_object(response: &str) -> Result<Value, LlmError> {
    let body = strip_code_fence(response.trim());

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(first_error) => outermost_braces(body)
            .and_then(|span| serde_json::from_str::<Value>(span).ok())
            .ok_or_else(|| {
                LlmError::InvalidResponse(format!("JSON parse error: {}", first_error))
            })?,
    };

    if value.is_object() {
        Ok(value)
    } else {
        Err(LlmError::InvalidResponse("Expected a JSON object".to_string()))
    }
}

/// Strip a surrounding ```json / ``` fence, if present
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Skip the info string (e.g. "json") on the opening line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => return text,
    };
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
