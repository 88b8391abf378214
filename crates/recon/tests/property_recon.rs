// Property-based tests for the reconciliation engine.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::HashSet;

use proptest::prelude::*;
use wrangle_recon::{reconcile, ReconStatus};
use wrangle_table::Table;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Side assignment for each generated key.
#[derive(Debug, Clone, Copy, PartialEq)]
enum KeyCategory {
    Both,
    AOnly,
    BOnly,
}

fn arb_key_category() -> impl Strategy<Value = KeyCategory> {
    prop_oneof![
        2 => Just(KeyCategory::Both),
        1 => Just(KeyCategory::AOnly),
        1 => Just(KeyCategory::BOnly),
    ]
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"[a-z0-9]{1,6}",
        1 => Just("".to_string()),
    ]
}

/// Distinct keys, each with a side assignment and an (A value, B value)
/// pair for the single payload column.
fn arb_dataset() -> impl Strategy<Value = Vec<(String, KeyCategory, String, String)>> {
    prop::collection::btree_set(r"k[0-9]{1,3}", 0..12).prop_flat_map(|keys| {
        let keys: Vec<String> = keys.into_iter().collect();
        let n = keys.len();
        (
            Just(keys),
            prop::collection::vec(arb_key_category(), n),
            prop::collection::vec(arb_value(), n),
            prop::collection::vec(arb_value(), n),
        )
            .prop_map(|(keys, cats, vals_a, vals_b)| {
                keys.into_iter()
                    .zip(cats)
                    .zip(vals_a.into_iter().zip(vals_b))
                    .map(|((k, c), (va, vb))| (k, c, va, vb))
                    .collect()
            })
    })
}

fn build_table(rows: &[(String, String)]) -> Table {
    let mut positional = vec![vec!["id".to_string(), "amount".to_string()]];
    for (key, value) in rows {
        positional.push(vec![key.clone(), value.clone()]);
    }
    Table::from_rows(positional).expect("header row present")
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    /// Counts stay consistent with the emitted entries, and every key in
    /// exactly one side yields exactly one missing entry for that side.
    #[test]
    fn counts_and_missing_entries_are_consistent(dataset in arb_dataset()) {
        let rows_a: Vec<(String, String)> = dataset
            .iter()
            .filter(|(_, c, _, _)| *c != KeyCategory::BOnly)
            .map(|(k, _, va, _)| (k.clone(), va.clone()))
            .collect();
        let rows_b: Vec<(String, String)> = dataset
            .iter()
            .filter(|(_, c, _, _)| *c != KeyCategory::AOnly)
            .map(|(k, _, _, vb)| (k.clone(), vb.clone()))
            .collect();

        // Preconditions are the caller's job; skip degenerate datasets.
        if rows_a.is_empty() || rows_b.is_empty() {
            return Ok(());
        }

        let report = reconcile(&build_table(&rows_a), &build_table(&rows_b), "id").unwrap();

        prop_assert_eq!(report.total_count, report.matched_count + report.mismatched_count);
        prop_assert_eq!(report.entries.len(), report.total_count);
        prop_assert!(report.duplicate_keys_b.is_empty());

        let missing_in_b: HashSet<&str> = report
            .entries
            .iter()
            .filter(|e| e.status == ReconStatus::MissingInB)
            .map(|e| e.key.as_str())
            .collect();
        let missing_in_a: HashSet<&str> = report
            .entries
            .iter()
            .filter(|e| e.status == ReconStatus::MissingInA)
            .map(|e| e.key.as_str())
            .collect();

        for (key, category, value_a, value_b) in &dataset {
            match category {
                KeyCategory::AOnly => {
                    prop_assert!(missing_in_b.contains(key.as_str()));
                    prop_assert!(!missing_in_a.contains(key.as_str()));
                }
                KeyCategory::BOnly => {
                    prop_assert!(missing_in_a.contains(key.as_str()));
                    prop_assert!(!missing_in_b.contains(key.as_str()));
                }
                KeyCategory::Both => {
                    prop_assert!(!missing_in_a.contains(key.as_str()));
                    prop_assert!(!missing_in_b.contains(key.as_str()));
                    let entry = report
                        .entries
                        .iter()
                        .find(|e| &e.key == key)
                        .expect("shared key has an entry");
                    let expected = if value_a == value_b {
                        ReconStatus::Matched
                    } else {
                        ReconStatus::Mismatch
                    };
                    prop_assert_eq!(entry.status, expected);
                }
            }
        }
    }

    /// Identical tables reconcile to all-matched with no problem entries.
    #[test]
    fn table_reconciles_cleanly_against_itself(dataset in arb_dataset()) {
        let rows: Vec<(String, String)> = dataset
            .iter()
            .map(|(k, _, va, _)| (k.clone(), va.clone()))
            .collect();
        if rows.is_empty() {
            return Ok(());
        }

        let a = build_table(&rows);
        let b = build_table(&rows);
        let report = reconcile(&a, &b, "id").unwrap();

        prop_assert_eq!(report.mismatched_count, 0);
        prop_assert_eq!(report.matched_count, rows.len());
        prop_assert_eq!(report.problems().count(), 0);
    }
}
