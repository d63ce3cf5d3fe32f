//! The recovery pipeline: parse or extract, unwrap, deep re-parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::deep::deep_parse;
use crate::error::RecoverError;
use crate::extract::extract_json_from_text;

/// Ceiling for whole-value unwrap iterations and for the deep re-parse walk.
pub(crate) const MAX_NESTING: usize = 10;

/// Result of [`recover`].
///
/// On failure only `error` is populated. `nesting_level` counts successful
/// whole-value string-decode iterations; `json_extracted` records whether the
/// value had to be cut out of surrounding non-JSON text (extraction does not
/// count as an unwrap level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_extracted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecoveryOutcome {
    fn failure(err: &RecoverError) -> Self {
        Self {
            success: false,
            parsed: None,
            nesting_level: None,
            json_extracted: None,
            error: Some(err.to_string()),
        }
    }
}

/// Recover a fully materialized JSON value from a raw string.
///
/// The pipeline:
///
/// 1. whitespace-only input fails with `"Input is empty"`;
/// 2. the trimmed input is parsed directly, falling back to
///    [`extract_json_from_text`] for payloads framed by non-JSON text;
/// 3. while the value is itself a string, it is repeatedly parsed
///    (`nesting_level` counts the hops, capped at 10);
/// 4. [`deep_parse`] resolves stringified JSON nested inside fields.
///
/// Never panics and never returns `Err`; all failure is reported through
/// [`RecoveryOutcome::error`].
///
/// # Example
///
/// ```
/// use json_lens_recover::recover;
/// use serde_json::json;
///
/// // Double-encoded: a JSON string whose content is a JSON object.
/// let outcome = recover(r#""{\"key\":\"value\"}""#);
/// assert!(outcome.success);
/// assert_eq!(outcome.parsed, Some(json!({"key": "value"})));
/// assert_eq!(outcome.nesting_level, Some(1));
/// assert_eq!(outcome.json_extracted, Some(false));
/// ```
pub fn recover(input: &str) -> RecoveryOutcome {
    match run(input) {
        Ok(outcome) => outcome,
        Err(err) => RecoveryOutcome::failure(&err),
    }
}

fn run(input: &str) -> Result<RecoveryOutcome, RecoverError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RecoverError::EmptyInput);
    }

    let (mut current, json_extracted) = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => (value, false),
        // Not JSON as-is: look for a JSON span inside the text. When that
        // also fails, surface the parse error for the whole input.
        Err(err) => match extract_json_from_text(input) {
            Some(value) => (value, true),
            None => return Err(RecoverError::MalformedJson(err)),
        },
    };

    // Unwrap whole-value stringification: "\"{\\\"a\\\":1}\"" and deeper.
    let mut nesting_level = 0;
    while nesting_level < MAX_NESTING {
        let unwrapped = match &current {
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(inner) => inner,
                Err(_) => break,
            },
            _ => break,
        };
        current = unwrapped;
        nesting_level += 1;
    }

    Ok(RecoveryOutcome {
        success: true,
        parsed: Some(deep_parse(current)),
        nesting_level: Some(nesting_level),
        json_extracted: Some(json_extracted),
        error: None,
    })
}
