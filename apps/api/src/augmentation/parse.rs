//! Best-effort recovery of an `AugmentationResult` from free-form model text.
//!
//! Stages run in order and each one is total:
//! 1. strict decode of the first `{` through the last `}`;
//! 2. strict decode of the whole text;
//! 3. the raw text wrapped as a single suggestion.

use serde_json::{Map, Value};

use crate::augmentation::AugmentationResult;

/// Always produces a result; never fails.
pub fn recover_augmentation(raw: &str) -> AugmentationResult {
    decode_braced(raw)
        .or_else(|| decode_object(raw))
        .unwrap_or_else(|| AugmentationResult {
            suggestions: Some(vec![raw.to_string()]),
            rewrites: Some(Vec::new()),
            summary: Some(String::new()),
        })
}

fn decode_braced(raw: &str) -> Option<AugmentationResult> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    decode_object(&raw[start..=end])
}

/// Strict JSON decode; anything other than an object counts as a failure.
fn decode_object(candidate: &str) -> Option<AugmentationResult> {
    match serde_json::from_str::<Value>(candidate).ok()? {
        Value::Object(map) => Some(from_object(&map)),
        _ => None,
    }
}

/// Missing or null fields stay `None`; a bare string where a list is
/// expected becomes a one-item list.
fn from_object(map: &Map<String, Value>) -> AugmentationResult {
    AugmentationResult {
        suggestions: map.get("suggestions").and_then(string_list),
        rewrites: map.get("rewrites").and_then(string_list),
        summary: map.get("summary").and_then(text_value),
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(text_value).collect()),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}
