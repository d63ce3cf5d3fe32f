use json_lens_diff::{compare, ChangeKind};
use proptest::prelude::*;
use serde_json::Value;

// Recursive JSON value strategy. Integers only for numbers so equality is
// exact across clones.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 _$-]{0,10}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_$-]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn compare_is_reflexive(v in arb_json()) {
        let outcome = compare(&v, &v);
        prop_assert!(!outcome.has_changes);
        prop_assert!(outcome.changes.is_empty());
    }

    #[test]
    fn stats_always_agree_with_changes(a in arb_json(), b in arb_json()) {
        let outcome = compare(&a, &b);
        prop_assert_eq!(outcome.has_changes, !outcome.changes.is_empty());

        let added = outcome.changes.iter().filter(|c| c.kind == ChangeKind::Added).count();
        let removed = outcome.changes.iter().filter(|c| c.kind == ChangeKind::Removed).count();
        let modified = outcome.changes.iter().filter(|c| c.kind == ChangeKind::Modified).count();
        prop_assert_eq!(outcome.stats.added, added);
        prop_assert_eq!(outcome.stats.removed, removed);
        prop_assert_eq!(outcome.stats.modified, modified);
        prop_assert_eq!(added + removed + modified, outcome.changes.len());
    }

    #[test]
    fn records_carry_the_right_values(a in arb_json(), b in arb_json()) {
        for change in compare(&a, &b).changes {
            match change.kind {
                ChangeKind::Added => {
                    prop_assert!(change.old_value.is_none());
                    prop_assert!(change.new_value.is_some());
                }
                ChangeKind::Removed => {
                    prop_assert!(change.old_value.is_some());
                    prop_assert!(change.new_value.is_none());
                }
                ChangeKind::Modified => {
                    prop_assert!(change.old_value.is_some());
                    prop_assert!(change.new_value.is_some());
                }
            }
            prop_assert!(change.children.is_none());
        }
    }

    #[test]
    fn swapped_inputs_mirror_kinds(a in arb_json(), b in arb_json()) {
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);
        prop_assert_eq!(forward.stats.added, backward.stats.removed);
        prop_assert_eq!(forward.stats.removed, backward.stats.added);
        prop_assert_eq!(forward.stats.modified, backward.stats.modified);
    }
}
