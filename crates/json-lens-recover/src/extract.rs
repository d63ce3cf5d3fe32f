//! Heuristic extraction of a JSON span from surrounding text.

use serde_json::Value;

/// Try to pull a parseable JSON value out of text with non-JSON framing,
/// such as log lines (`[timestamp] INFO response {...}`).
///
/// Candidate start positions are the first `{` and the first `[`, tried in
/// ascending order. For each candidate, the substring to the end of the
/// input is parsed first; if that fails, the substring bounded by the *last*
/// occurrence of the matching closer is tried. The first parse that succeeds
/// wins.
///
/// Best-effort by design: a closer inside a string literal can defeat the
/// last-closer bound. Returns `None` when no candidate parses.
///
/// # Example
///
/// ```
/// use json_lens_recover::extract_json_from_text;
/// use serde_json::json;
///
/// let found = extract_json_from_text("status=ok payload=[1,2,3] (cached)");
/// assert_eq!(found, Some(json!([1, 2, 3])));
/// assert_eq!(extract_json_from_text("no json here"), None);
/// ```
pub fn extract_json_from_text(input: &str) -> Option<Value> {
    let mut candidates: Vec<usize> = Vec::new();
    if let Some(pos) = input.find('{') {
        candidates.push(pos);
    }
    if let Some(pos) = input.find('[') {
        candidates.push(pos);
    }
    candidates.sort_unstable();

    for &start in &candidates {
        let suffix = input[start..].trim();
        if let Ok(value) = serde_json::from_str::<Value>(suffix) {
            return Some(value);
        }
        let closer = if input[start..].starts_with('{') { '}' } else { ']' };
        if let Some(close) = input.rfind(closer) {
            if close > start {
                if let Ok(value) = serde_json::from_str::<Value>(&input[start..=close]) {
                    return Some(value);
                }
            }
        }
    }
    None
}
