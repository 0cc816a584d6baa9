use serde_json::{Number, Value};

use crate::error::TranslateError;

/// The provider's reply, kept untyped.
/// Shape seen in the wild: [[["translated", "original", null, null, 1], ...], null, "en", ...]
pub type RawResponse = Vec<Value>;

/// Decode a body into a top-level JSON array.
pub fn parse(body: &[u8]) -> Result<RawResponse, TranslateError> {
    Ok(serde_json::from_slice(body)?)
}

/// Concatenate the first element of every segment in the first block.
///
/// Only position 0 of each segment is used; the rest (source text, scores,
/// alternates) is ignored. Segments that are not arrays, or are empty,
/// contribute nothing. An empty concatenation is not a translation.
pub fn extract(raw: &[Value]) -> Result<String, TranslateError> {
    let blocks = raw.first().ok_or(TranslateError::EmptyResponse)?;

    let fragments: Vec<String> = blocks
        .as_array()
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.as_array()?.first())
                .map(stringify_leaf)
                .collect()
        })
        .unwrap_or_default();

    log::trace!("extracted {} segment(s)", fragments.len());

    let text = fragments.concat();
    if text.is_empty() {
        return Err(TranslateError::NoTranslation);
    }
    Ok(text)
}

/// Default string form of a leaf value.
pub fn stringify_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        other => other.to_string(),
    }
}

/// Whole-valued floats print without a fractional part (`1.0` -> `1`).
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
