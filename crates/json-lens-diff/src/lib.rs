//! json-lens-diff — recursive, path-addressed diff between JSON values.
//!
//! [`compare`] walks two `serde_json::Value` trees and produces a flat,
//! ordered list of [`ChangeRecord`]s, each tagged with the path of the value
//! it describes, plus aggregate counts. [`flatten`] is a companion that
//! flattens externally constructed nested change trees.
//!
//! # Example
//!
//! ```
//! use json_lens_diff::{compare, ChangeKind};
//! use serde_json::json;
//!
//! let outcome = compare(&json!({"a": {"b": 1}}), &json!({"a": {"b": 2}}));
//! assert!(outcome.has_changes);
//! assert_eq!(outcome.changes[0].path, "a.b");
//! assert_eq!(outcome.changes[0].kind, ChangeKind::Modified);
//! assert_eq!(outcome.stats.modified, 1);
//! ```

pub mod compare;
pub mod path;
pub mod types;

// Re-exports for convenience
pub use compare::{compare, flatten};
pub use path::{index_path, member_path};
pub use types::{ChangeKind, ChangeRecord, DiffOutcome, DiffStats};
