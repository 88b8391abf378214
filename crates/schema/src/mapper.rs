// Auto-mapping of source headers onto an output template.
//
// Three tiers per target header, first hit wins: exact (case-insensitive)
// match, dictionary synonym match, fuzzy normalized match. Greedy and
// independent per target: two targets may land on the same source header
// and there is no backtracking.

use std::collections::HashMap;

use wrangle_table::{Record, Table};

use crate::dictionary::SynonymDictionary;

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Caller-owned target-header → source-header assignment. Seeded by prior
/// user edits, filled in by [`auto_map`], read at export time by
/// [`project`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    targets: HashMap<String, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, target: impl Into<String>, source: impl Into<String>) {
        self.targets.insert(target.into(), source.into());
    }

    /// Clear a target back to unmapped.
    pub fn unset(&mut self, target: &str) {
        self.targets.remove(target);
    }

    pub fn get(&self, target: &str) -> Option<&str> {
        self.targets.get(target).map(String::as_str)
    }

    pub fn is_mapped(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Auto-map
// ---------------------------------------------------------------------------

/// Fill in `existing` for each target header, trying the tiers in order.
///
/// The seed is never cleared: a target that no tier resolves keeps whatever
/// it already had (including absent). Tiers 1 and 2 assign whenever they
/// hit; the fuzzy tier only runs for targets still unmapped, so it cannot
/// displace a seed value or an earlier tier's pick. Never fails — unmapped
/// targets are the caller's to surface.
pub fn auto_map(
    source_headers: &[String],
    target_headers: &[String],
    dictionary: &SynonymDictionary,
    existing: &Mapping,
) -> Mapping {
    let mut mapping = existing.clone();

    for target in target_headers {
        // 1. Exact match in source
        if let Some(source) = source_headers
            .iter()
            .find(|s| s.to_lowercase() == target.to_lowercase())
        {
            mapping.set(target, source);
            continue;
        }

        // 2. Dictionary lookup: the entry covering the target, then the
        // first source header belonging to that entry's alias set.
        if let Some(entry) = dictionary.entry_for(target) {
            if let Some(source) = source_headers.iter().find(|s| entry.contains(s)) {
                mapping.set(target, source);
            }
        }

        // 3. Fuzzy fallback
        if !mapping.is_mapped(target) {
            let clean_target = normalize(target);
            let hit = source_headers.iter().find(|source| {
                let clean_source = normalize(source);
                clean_source == clean_target
                    || clean_source.contains(&clean_target)
                    || clean_target.contains(&clean_source)
            });
            if let Some(source) = hit {
                mapping.set(target, source);
            }
        }
    }

    mapping
}

/// Lowercase and strip underscores and whitespace.
fn normalize(header: &str) -> String {
    header
        .to_lowercase()
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect()
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Pull every source record through the mapping into the target schema.
/// Unmapped targets (and mapped-but-absent source values) come out as empty
/// strings, ready for [`wrangle_table::to_csv`].
pub fn project(table: &Table, target_headers: &[String], mapping: &Mapping) -> Vec<Record> {
    table
        .records
        .iter()
        .map(|record| {
            target_headers
                .iter()
                .map(|target| {
                    let value = mapping
                        .get(target)
                        .map(|source| record.get(source))
                        .unwrap_or("");
                    (target.clone(), value.to_string())
                })
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
