use serde::{Deserialize, Serialize};

/// 1-based position of a parse failure in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// Location of a `serde_json` parse error, when the error carries one.
///
/// Syntax and EOF errors report a position; I/O and data-shape errors report
/// line 0, which maps to `None` here.
pub fn error_location(err: &serde_json::Error) -> Option<ErrorLocation> {
    if err.line() == 0 {
        return None;
    }
    Some(ErrorLocation {
        line: err.line(),
        column: err.column(),
    })
}
