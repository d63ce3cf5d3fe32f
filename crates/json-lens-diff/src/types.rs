use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification of a single change produced by the differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One change, located by the path from the diff root to the value it
/// describes.
///
/// `Added` records carry only `new_value`, `Removed` records only
/// `old_value`, `Modified` records both. `children` is never produced by
/// [`compare`](crate::compare) — it exists so that externally built nested
/// change trees can be fed through [`flatten`](crate::flatten).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub path: String,
    pub kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChangeRecord>>,
}

impl ChangeRecord {
    pub fn added(path: String, new_value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(new_value),
            children: None,
        }
    }

    pub fn removed(path: String, old_value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Removed,
            old_value: Some(old_value),
            new_value: None,
            children: None,
        }
    }

    pub fn modified(path: String, old_value: Value, new_value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Modified,
            old_value: Some(old_value),
            new_value: Some(new_value),
            children: None,
        }
    }
}

/// Per-kind counts over a flat change list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    /// Count each record's kind in one pass.
    pub fn tally(changes: &[ChangeRecord]) -> Self {
        let mut stats = Self::default();
        for change in changes {
            match change.kind {
                ChangeKind::Added => stats.added += 1,
                ChangeKind::Removed => stats.removed += 1,
                ChangeKind::Modified => stats.modified += 1,
            }
        }
        stats
    }
}

/// Result of [`compare`](crate::compare).
///
/// Invariants: `has_changes == !changes.is_empty()`, and `stats` always
/// agrees with the per-kind counts of `changes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOutcome {
    pub has_changes: bool,
    pub changes: Vec<ChangeRecord>,
    pub stats: DiffStats,
}
