//! Conformance of model output to a schema template.
//!
//! The renderer downstream walks the conformed value by key and never
//! checks for missing fields, so conformance guarantees the template's
//! exact shape: missing or mistyped leaves fall back to template defaults,
//! unknown keys are dropped, numeric leaves are clamped to the score
//! range.

use serde_json::Value;
use tracing::warn;

/// Smallest accepted numeric leaf (metric scores).
const SCORE_MIN: i64 = 0;
/// Largest accepted numeric leaf.
const SCORE_MAX: i64 = 100;

/// Reshape `actual` so it has exactly the template's structure.
///
/// Rules, applied recursively:
/// - objects: every template key is present in the output; unknown keys in
///   `actual` are dropped;
/// - numeric leaves: taken from `actual` when numeric, clamped to 0-100;
/// - string leaves: taken when `actual` has a string;
/// - array leaves: string elements kept, everything else dropped;
/// - any mismatch falls back to the template default and is logged.
pub fn conform_to_template(template: &Value, actual: &Value) -> Value {
    conform_value("$", template, Some(actual))
}

fn conform_value(path: &str, template: &Value, actual: Option<&Value>) -> Value {
    match template {
        Value::Object(shape) => {
            let fields = actual.and_then(Value::as_object);
            if actual.is_some() && fields.is_none() {
                warn!(path, "Expected an object, using template defaults");
            }
            let mut out = serde_json::Map::with_capacity(shape.len());
            for (key, sub_template) in shape {
                let sub_path = format!("{}.{}", path, key);
                let sub_actual = fields.and_then(|f| f.get(key));
                if fields.is_some() && sub_actual.is_none() {
                    warn!(path = %sub_path, "Missing field, using template default");
                }
                out.insert(key.clone(), conform_value(&sub_path, sub_template, sub_actual));
            }
            Value::Object(out)
        }
        Value::Array(_) => match actual.and_then(Value::as_array) {
            Some(items) => Value::Array(
                items
                    .iter()
                    .filter(|item| {
                        let keep = item.is_string();
                        if !keep {
                            warn!(path, "Dropping non-string list element");
                        }
                        keep
                    })
                    .cloned()
                    .collect(),
            ),
            None => {
                if actual.is_some() {
                    warn!(path, "Expected a list, using empty default");
                }
                Value::Array(Vec::new())
            }
        },
        Value::Number(_) => match actual.and_then(|v| number_as_i64(v)) {
            Some(n) => Value::from(n.clamp(SCORE_MIN, SCORE_MAX)),
            None => {
                if actual.is_some() {
                    warn!(path, "Expected a number, using template default");
                }
                template.clone()
            }
        },
        Value::String(_) => match actual.and_then(Value::as_str) {
            Some(s) => Value::from(s),
            None => {
                if actual.is_some() {
                    warn!(path, "Expected a string, using template default");
                }
                template.clone()
            }
        },
        // Null/bool leaves do not occur in our templates; keep the default.
        other => other.clone(),
    }
}

/// Accept integral and float score forms; the model sometimes returns
/// `87.0`.
fn number_as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
}
