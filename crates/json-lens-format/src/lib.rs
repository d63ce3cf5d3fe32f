//! json-lens-format — simple format transforms over JSON text: validation,
//! pretty-printing with configurable indent and optional deep key sorting,
//! and minification.
//!
//! All entry points return a [`FormatOutcome`] instead of `Result`; parse
//! failures carry the parser's message and, when available, a 1-based
//! [`ErrorLocation`].
//!
//! # Example
//!
//! ```
//! use json_lens_format::{pretty, FormatOptions};
//!
//! let options = FormatOptions { indent: 2, sort_keys: true };
//! let outcome = pretty("{\"b\":1,\"a\":2}", &options);
//! assert_eq!(outcome.formatted.unwrap(), "{\n  \"a\": 2,\n  \"b\": 1\n}");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod location;
pub mod sort;

// Re-exports for convenience
pub use location::{error_location, ErrorLocation};
pub use sort::sort_keys_deep;

/// Options for [`pretty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Sort object keys lexicographically at every depth.
    pub sort_keys: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            sort_keys: false,
        }
    }
}

/// Result of [`validate`], [`pretty`], or [`minify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_location: Option<ErrorLocation>,
}

impl FormatOutcome {
    fn ok(formatted: Option<String>) -> Self {
        Self {
            success: true,
            formatted,
            error: None,
            error_location: None,
        }
    }

    fn empty_input() -> Self {
        Self {
            success: false,
            formatted: None,
            error: Some("Input is empty".to_string()),
            error_location: None,
        }
    }

    fn parse_failure(err: &serde_json::Error) -> Self {
        Self {
            success: false,
            formatted: None,
            error: Some(err.to_string()),
            error_location: error_location(err),
        }
    }
}

/// Check that `input` is well-formed JSON.
///
/// Succeeds with no `formatted` text; failures report the parser message and
/// location.
pub fn validate(input: &str) -> FormatOutcome {
    if input.trim().is_empty() {
        return FormatOutcome::empty_input();
    }
    match serde_json::from_str::<Value>(input) {
        Ok(_) => FormatOutcome::ok(None),
        Err(err) => FormatOutcome::parse_failure(&err),
    }
}

/// Re-serialize `input` with `options.indent` spaces per level, optionally
/// sorting object keys at every depth first.
pub fn pretty(input: &str, options: &FormatOptions) -> FormatOutcome {
    if input.trim().is_empty() {
        return FormatOutcome::empty_input();
    }
    match serde_json::from_str::<Value>(input) {
        Ok(parsed) => {
            let value = if options.sort_keys {
                sort_keys_deep(&parsed)
            } else {
                parsed
            };
            FormatOutcome::ok(Some(to_indented_string(&value, options.indent)))
        }
        Err(err) => FormatOutcome::parse_failure(&err),
    }
}

/// Re-serialize `input` in compact form.
pub fn minify(input: &str) -> FormatOutcome {
    if input.trim().is_empty() {
        return FormatOutcome::empty_input();
    }
    match serde_json::from_str::<Value>(input) {
        Ok(parsed) => FormatOutcome::ok(Some(parsed.to_string())),
        Err(err) => FormatOutcome::parse_failure(&err),
    }
}

fn to_indented_string(value: &Value, indent: usize) -> String {
    let pad = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    // Serializing a Value into a Vec cannot fail.
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}
