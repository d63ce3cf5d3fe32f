use serde_json::{Map, Value};

/// Return a copy of `value` with object keys sorted lexicographically at
/// every depth. Arrays are mapped element-wise; scalars are returned as-is.
///
/// # Example
///
/// ```
/// use json_lens_format::sort_keys_deep;
/// use serde_json::json;
///
/// let v = json!({"b": {"d": 1, "c": 2}, "a": [{"z": 0, "y": 0}]});
/// let sorted = sort_keys_deep(&v);
/// let keys: Vec<&String> = sorted.as_object().unwrap().keys().collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub fn sort_keys_deep(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(sort_keys_deep).collect()),
        Value::Object(members) => {
            let mut keys: Vec<&String> = members.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(members.len());
            for key in keys {
                sorted.insert(key.clone(), sort_keys_deep(&members[key.as_str()]));
            }
            Value::Object(sorted)
        }
        scalar => scalar.clone(),
    }
}
