//! Deep re-parse of stringified JSON embedded inside a value.

use serde_json::Value;

use crate::recover::MAX_NESTING;

/// Rebuild a value, parsing every string field or element that itself looks
/// like JSON (trimmed, starts and ends with `{…}` or `[…]`).
///
/// Parsed replacements are walked in turn, so chains of stringified JSON
/// inside stringified JSON resolve fully, each hop consuming one unit of the
/// shared depth budget (10 levels). Strings that fail to parse are left
/// untouched; scalars pass through unchanged.
///
/// # Example
///
/// ```
/// use json_lens_recover::deep_parse;
/// use serde_json::json;
///
/// let raw = json!({"body": "{\"a\":1}", "note": "{not json"});
/// let out = deep_parse(raw);
/// assert_eq!(out, json!({"body": {"a": 1}, "note": "{not json"}));
/// ```
pub fn deep_parse(value: Value) -> Value {
    deep_parse_at(value, 0)
}

fn deep_parse_at(value: Value, depth: usize) -> Value {
    if depth > MAX_NESTING {
        return value;
    }
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            let looks_like_json = (trimmed.starts_with('{') && trimmed.ends_with('}'))
                || (trimmed.starts_with('[') && trimmed.ends_with(']'));
            if looks_like_json {
                if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
                    return deep_parse_at(parsed, depth + 1);
                }
            }
            Value::String(text)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| deep_parse_at(item, depth + 1))
                .collect(),
        ),
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(key, member)| (key, deep_parse_at(member, depth + 1)))
                .collect(),
        ),
        scalar => scalar,
    }
}
