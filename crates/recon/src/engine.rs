use std::collections::{BTreeMap, HashMap};

use wrangle_table::Table;

use crate::error::{ReconError, Side};
use crate::model::{FieldDiff, ReconEntry, ReconReport, ReconStatus};

/// Join `a` and `b` on `join_key` and classify every row.
///
/// A-side rows with an empty key are skipped outright. Rows sharing a key
/// are compared field by field across the headers both tables define; any
/// difference makes the pair a `Mismatch`, otherwise `Matched`. Keys on one
/// side only become `MissingInB` / `MissingInA`. Entry order follows
/// table A's records, then table B's record order for the residual
/// `MissingInA` rows.
pub fn reconcile(a: &Table, b: &Table, join_key: &str) -> Result<ReconReport, ReconError> {
    if join_key.is_empty() {
        return Err(ReconError::EmptyJoinKey);
    }
    if a.is_empty() {
        return Err(ReconError::EmptyTable(Side::A));
    }
    if b.is_empty() {
        return Err(ReconError::EmptyTable(Side::B));
    }
    for (table, side) in [(a, Side::A), (b, Side::B)] {
        if !table.has_header(join_key) {
            return Err(ReconError::MissingJoinKey {
                side,
                key: join_key.to_string(),
            });
        }
    }

    // Key → record index into b.records. A repeated key silently keeps the
    // later record, but the repeat itself is reported.
    let mut b_lookup: HashMap<&str, usize> = HashMap::new();
    let mut duplicate_keys_b: Vec<String> = Vec::new();
    for (i, record) in b.records.iter().enumerate() {
        let key = record.get(join_key);
        if key.is_empty() {
            continue;
        }
        if b_lookup.insert(key, i).is_some() && !duplicate_keys_b.iter().any(|k| k == key) {
            duplicate_keys_b.push(key.to_string());
        }
    }

    let mut matched_count = 0;
    let mut mismatched_count = 0;
    let mut entries: Vec<ReconEntry> = Vec::new();

    for row_a in &a.records {
        let key = row_a.get(join_key);
        if key.is_empty() {
            continue;
        }

        let Some(bi) = b_lookup.remove(key) else {
            entries.push(ReconEntry::plain(key, ReconStatus::MissingInB));
            mismatched_count += 1;
            continue;
        };

        let row_b = &b.records[bi];
        let mut field_diffs = BTreeMap::new();
        for header in &a.headers {
            // Only headers B also defines are comparable.
            if b.has_header(header) && row_a.get(header) != row_b.get(header) {
                field_diffs.insert(
                    header.clone(),
                    FieldDiff {
                        a: row_a.get(header).to_string(),
                        b: row_b.get(header).to_string(),
                    },
                );
            }
        }

        if field_diffs.is_empty() {
            matched_count += 1;
            entries.push(ReconEntry::plain(key, ReconStatus::Matched));
        } else {
            mismatched_count += 1;
            entries.push(ReconEntry {
                key: key.to_string(),
                status: ReconStatus::Mismatch,
                field_diffs,
            });
        }
    }

    // Whatever A never consumed is missing on its side. Walking b.records
    // again keeps the residual entries in B's own row order; only the
    // surviving (last) record of a duplicated key is still in the lookup.
    for (i, record) in b.records.iter().enumerate() {
        let key = record.get(join_key);
        if key.is_empty() {
            continue;
        }
        if b_lookup.get(key) == Some(&i) {
            b_lookup.remove(key);
            entries.push(ReconEntry::plain(key, ReconStatus::MissingInA));
            mismatched_count += 1;
        }
    }

    Ok(ReconReport {
        matched_count,
        mismatched_count,
        total_count: matched_count + mismatched_count,
        entries,
        duplicate_keys_b,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
