//! json-lens — structural analysis of JSON values.
//!
//! Facade over the workspace crates:
//!
//! - [`compare`] / [`flatten`] — recursive, path-addressed diff between two
//!   values ([`json_lens_diff`]);
//! - [`recover`] — rebuild structured data from stringified, nested, or
//!   text-embedded JSON ([`json_lens_recover`]);
//! - [`validate`] / [`pretty`] / [`minify`] — plain format transforms
//!   ([`json_lens_format`]).
//!
//! # Examples
//!
//! Diff two documents:
//!
//! ```
//! use json_lens::{compare, ChangeKind};
//! use serde_json::json;
//!
//! let outcome = compare(
//!     &json!({"user": {"name": "ada", "tags": ["a"]}}),
//!     &json!({"user": {"name": "ada", "tags": ["a", "b"]}}),
//! );
//! assert_eq!(outcome.changes.len(), 1);
//! assert_eq!(outcome.changes[0].path, "user.tags[1]");
//! assert_eq!(outcome.changes[0].kind, ChangeKind::Added);
//! ```
//!
//! Recover a payload from a noisy log line:
//!
//! ```
//! use json_lens::recover;
//! use serde_json::json;
//!
//! let outcome = recover(r#"[req-9] DEBUG body={"data":"{\"id\":7}"}"#);
//! assert!(outcome.success);
//! assert_eq!(outcome.parsed, Some(json!({"data": {"id": 7}})));
//! ```

pub use json_lens_diff::{
    compare, flatten, index_path, member_path, ChangeKind, ChangeRecord, DiffOutcome, DiffStats,
};
pub use json_lens_format::{
    error_location, minify, pretty, sort_keys_deep, validate, ErrorLocation, FormatOptions,
    FormatOutcome,
};
pub use json_lens_recover::{
    deep_parse, extract_json_from_text, recover, RecoverError, RecoveryOutcome,
};
