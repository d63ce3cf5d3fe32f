use thiserror::Error;

/// Failure taxonomy for [`recover`](crate::recover).
///
/// Rendered into [`RecoveryOutcome::error`](crate::RecoveryOutcome) rather
/// than returned to callers directly.
#[derive(Debug, Error)]
pub enum RecoverError {
    /// The input was empty or whitespace-only.
    #[error("Input is empty")]
    EmptyInput,

    /// Nothing parseable: the input is not JSON and no embedded JSON span
    /// could be located. Carries the parser's message for the whole input.
    #[error(transparent)]
    MalformedJson(#[from] serde_json::Error),
}
