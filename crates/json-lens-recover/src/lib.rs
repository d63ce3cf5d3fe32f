//! json-lens-recover — recover structured data from strings that are
//! JSON-encoded one or more times, embedded inside non-JSON text, or that
//! carry stringified JSON inside their own fields.
//!
//! The single entry point is [`recover`]:
//!
//! ```
//! use json_lens_recover::recover;
//! use serde_json::json;
//!
//! // A log line with a JSON payload buried in it.
//! let outcome = recover(r#"[worker-3] INFO response {"data":{"key":"value"}}"#);
//! assert!(outcome.success);
//! assert_eq!(outcome.json_extracted, Some(true));
//! assert_eq!(outcome.parsed, Some(json!({"data": {"key": "value"}})));
//! ```
//!
//! Failure never surfaces as an `Err` or a panic; callers branch on
//! [`RecoveryOutcome::success`].

pub mod deep;
pub mod error;
pub mod extract;
pub mod recover;

// Re-exports for convenience
pub use deep::deep_parse;
pub use error::RecoverError;
pub use extract::extract_json_from_text;
pub use recover::{recover, RecoveryOutcome};
