//! The recursive differ.

use serde_json::{Map, Value};

use crate::path::{index_path, member_path};
use crate::types::{ChangeRecord, DiffOutcome, DiffStats};

/// Recursion ceiling. Subtrees deeper than this yield no further records;
/// the differ degrades silently instead of faulting.
const MAX_DEPTH: usize = 50;

/// Compare two JSON values and report every structural difference.
///
/// Total over any pair of values; never fails. Objects are compared over the
/// union of their keys, arrays positionally (no reordering detection), and a
/// change of coarse type (null / array / object / string / number / boolean)
/// collapses the whole subtree into a single `modified` record.
///
/// # Example
///
/// ```
/// use json_lens_diff::{compare, ChangeKind};
/// use serde_json::json;
///
/// let outcome = compare(&json!([1, 2]), &json!([1, 2, 3]));
/// assert_eq!(outcome.changes.len(), 1);
/// assert_eq!(outcome.changes[0].path, "[2]");
/// assert_eq!(outcome.changes[0].kind, ChangeKind::Added);
/// assert_eq!(outcome.stats.added, 1);
/// ```
pub fn compare(old_value: &Value, new_value: &Value) -> DiffOutcome {
    let mut changes = Vec::new();
    diff_values(&mut changes, old_value, new_value, "", 0);
    DiffOutcome {
        has_changes: !changes.is_empty(),
        stats: DiffStats::tally(&changes),
        changes,
    }
}

fn diff_values(changes: &mut Vec<ChangeRecord>, old: &Value, new: &Value, path: &str, depth: usize) {
    if depth > MAX_DEPTH {
        return;
    }
    match (old, new) {
        (Value::Object(o), Value::Object(n)) => diff_objects(changes, o, n, path, depth),
        (Value::Array(o), Value::Array(n)) => diff_arrays(changes, o, n, path, depth),
        // Everything else: either the coarse types differ (one flat record,
        // no recursion into mismatched shapes) or two scalars are compared
        // by equality.
        _ => {
            if old != new {
                changes.push(ChangeRecord::modified(
                    path.to_string(),
                    old.clone(),
                    new.clone(),
                ));
            }
        }
    }
}

fn diff_objects(
    changes: &mut Vec<ChangeRecord>,
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    path: &str,
    depth: usize,
) {
    // Union of keys: keys only in `old` are removals, keys only in `new` are
    // additions, shared keys recurse.
    for (key, old_val) in old {
        let child = member_path(path, key);
        match new.get(key) {
            Some(new_val) => diff_values(changes, old_val, new_val, &child, depth + 1),
            None => changes.push(ChangeRecord::removed(child, old_val.clone())),
        }
    }
    for (key, new_val) in new {
        if !old.contains_key(key) {
            changes.push(ChangeRecord::added(member_path(path, key), new_val.clone()));
        }
    }
}

fn diff_arrays(changes: &mut Vec<ChangeRecord>, old: &[Value], new: &[Value], path: &str, depth: usize) {
    let max_len = old.len().max(new.len());
    for i in 0..max_len {
        let child = index_path(path, i);
        match (old.get(i), new.get(i)) {
            (Some(o), Some(n)) => diff_values(changes, o, n, &child, depth + 1),
            (Some(o), None) => changes.push(ChangeRecord::removed(child, o.clone())),
            (None, Some(n)) => changes.push(ChangeRecord::added(child, n.clone())),
            (None, None) => {}
        }
    }
}

/// Flatten a nested change tree into depth-first pre-order.
///
/// Each record is emitted before its `children`. Records without `children`
/// pass through unchanged. [`compare`] itself never nests records; this
/// supports change trees grouped by an external aggregation pass.
pub fn flatten(changes: &[ChangeRecord]) -> Vec<ChangeRecord> {
    let mut flat = Vec::new();
    flatten_into(&mut flat, changes);
    flat
}

fn flatten_into(flat: &mut Vec<ChangeRecord>, changes: &[ChangeRecord]) {
    for change in changes {
        flat.push(change.clone());
        if let Some(children) = &change.children {
            flatten_into(flat, children);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeKind;
    use serde_json::json;

    #[test]
    fn equal_values_produce_no_changes() {
        let v = json!({"a": [1, "x", {"b": null}], "c": true});
        let outcome = compare(&v, &v);
        assert!(!outcome.has_changes);
        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.stats, DiffStats::default());
    }

    #[test]
    fn scalar_change_is_one_modified_record() {
        let outcome = compare(&json!(1), &json!(2));
        assert_eq!(outcome.changes.len(), 1);
        let change = &outcome.changes[0];
        assert_eq!(change.path, "");
        assert_eq!(change.kind, ChangeKind::Modified);
        assert_eq!(change.old_value, Some(json!(1)));
        assert_eq!(change.new_value, Some(json!(2)));
    }

    #[test]
    fn added_and_removed_keys() {
        let outcome = compare(&json!({"a": 1, "b": 2}), &json!({"a": 1, "c": 3}));
        assert_eq!(outcome.stats.removed, 1);
        assert_eq!(outcome.stats.added, 1);
        assert_eq!(outcome.stats.modified, 0);

        let removed = outcome
            .changes
            .iter()
            .find(|c| c.kind == ChangeKind::Removed)
            .expect("removed record");
        assert_eq!(removed.path, "b");
        assert_eq!(removed.old_value, Some(json!(2)));
        assert_eq!(removed.new_value, None);

        let added = outcome
            .changes
            .iter()
            .find(|c| c.kind == ChangeKind::Added)
            .expect("added record");
        assert_eq!(added.path, "c");
        assert_eq!(added.new_value, Some(json!(3)));
        assert_eq!(added.old_value, None);
    }

    #[test]
    fn type_change_collapses_subtree() {
        let outcome = compare(&json!({"a": "s"}), &json!({"a": {"nested": true}}));
        assert_eq!(outcome.changes.len(), 1);
        let change = &outcome.changes[0];
        assert_eq!(change.path, "a");
        assert_eq!(change.kind, ChangeKind::Modified);
        assert_eq!(change.old_value, Some(json!("s")));
        assert_eq!(change.new_value, Some(json!({"nested": true})));
    }

    #[test]
    fn null_versus_value_is_a_type_change() {
        let outcome = compare(&json!({"a": null}), &json!({"a": 0}));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].kind, ChangeKind::Modified);
    }

    #[test]
    fn array_growth_and_shrinkage() {
        let outcome = compare(&json!([1, 2]), &json!([1, 2, 3]));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].path, "[2]");
        assert_eq!(outcome.changes[0].kind, ChangeKind::Added);
        assert_eq!(outcome.changes[0].new_value, Some(json!(3)));

        let outcome = compare(&json!([1, 2, 3]), &json!([1, 2]));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].path, "[2]");
        assert_eq!(outcome.changes[0].kind, ChangeKind::Removed);
        assert_eq!(outcome.changes[0].old_value, Some(json!(3)));
    }

    #[test]
    fn nested_paths_combine_dots_indexes_and_quoting() {
        let outcome = compare(
            &json!({"rows": [{"id": 1, "my-key": "a"}]}),
            &json!({"rows": [{"id": 1, "my-key": "b"}]}),
        );
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].path, "rows[0][\"my-key\"]");
    }

    #[test]
    fn depth_cap_silently_truncates() {
        // Build two values differing only below the cap.
        let mut old = json!("old");
        let mut new = json!("new");
        for _ in 0..(MAX_DEPTH + 5) {
            old = json!({ "k": old });
            new = json!({ "k": new });
        }
        let outcome = compare(&old, &new);
        assert!(!outcome.has_changes);
    }

    #[test]
    fn difference_at_the_cap_is_still_reported() {
        let mut old = json!("old");
        let mut new = json!("new");
        for _ in 0..MAX_DEPTH {
            old = json!({ "k": old });
            new = json!({ "k": new });
        }
        let outcome = compare(&old, &new);
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].kind, ChangeKind::Modified);
    }

    #[test]
    fn flatten_is_preorder() {
        let grandchild = ChangeRecord::modified("a.b.c".into(), json!(1), json!(2));
        let mut child = ChangeRecord::modified("a.b".into(), json!(1), json!(2));
        child.children = Some(vec![grandchild.clone()]);
        let mut parent = ChangeRecord::modified("a".into(), json!(1), json!(2));
        parent.children = Some(vec![child.clone()]);
        let sibling = ChangeRecord::added("z".into(), json!(3));

        let flat = flatten(&[parent.clone(), sibling.clone()]);
        let paths: Vec<&str> = flat.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, ["a", "a.b", "a.b.c", "z"]);
    }

    #[test]
    fn flatten_passes_leaf_records_through() {
        let leaf = ChangeRecord::removed("x".into(), json!(null));
        assert_eq!(flatten(&[leaf.clone()]), vec![leaf]);
        assert!(flatten(&[]).is_empty());
    }
}
