//! JSON extraction from model replies.
//!
//! Providers in JSON mode still occasionally wrap the payload in code
//! fences or prose, so extraction strips fences first and falls back to
//! the outermost brace pair.

use ghostwriter_error::{AnalysisError, AnalysisErrorKind};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid fence regex")
    })
}

/// Locate the JSON object embedded in a model reply.
///
/// Checks for a fenced block first, then the outermost `{...}` span.
///
/// # Errors
///
/// `ExtractJson` when no object-shaped span exists in the reply.
pub fn extract_json(response: &str) -> Result<String, AnalysisError> {
    if let Some(caps) = fence_regex().captures(response) {
        return Ok(caps[1].to_string());
    }

    let start = response.find('{');
    let end = response.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(response[start..=end].to_string()),
        _ => Err(AnalysisError::new(AnalysisErrorKind::ExtractJson(
            preview(response),
        ))),
    }
}

/// Parse an extracted span into a JSON object.
///
/// # Errors
///
/// `ParseJson` for invalid JSON; `NotAnObject` when the payload parses but
/// is not an object.
pub fn parse_json_object(payload: &str) -> Result<Value, AnalysisError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| AnalysisError::new(AnalysisErrorKind::ParseJson(e.to_string())))?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(AnalysisError::new(AnalysisErrorKind::NotAnObject(
            json_type_name(&value).to_string(),
        )))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn preview(response: &str) -> String {
    const MAX: usize = 120;
    let trimmed = response.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let mut cut = MAX;
        while !trimmed.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &trimmed[..cut])
    }
}
