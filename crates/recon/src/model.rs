use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconStatus {
    Matched,
    Mismatch,
    MissingInB,
    MissingInA,
}

impl std::fmt::Display for ReconStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "matched"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::MissingInB => write!(f, "missing_in_b"),
            Self::MissingInA => write!(f, "missing_in_a"),
        }
    }
}

/// One differing shared field: the value each side holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiff {
    pub a: String,
    pub b: String,
}

/// Per-key outcome. `field_diffs` is populated only for `Mismatch`, keyed
/// by shared header name (sorted for stable output).
#[derive(Debug, Clone, Serialize)]
pub struct ReconEntry {
    pub key: String,
    pub status: ReconStatus,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub field_diffs: BTreeMap<String, FieldDiff>,
}

impl ReconEntry {
    pub(crate) fn plain(key: &str, status: ReconStatus) -> Self {
        Self {
            key: key.to_string(),
            status,
            field_diffs: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Full reconciliation outcome. Matched rows are included in `entries` so
/// the engine stays a pure function of its inputs; a presentation layer
/// that only cares about problems filters on `status`.
#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub matched_count: usize,
    pub mismatched_count: usize,
    pub total_count: usize,
    pub entries: Vec<ReconEntry>,
    /// Join keys that appeared more than once in table B. The last record
    /// for a repeated key wins; repeats are surfaced here instead of being
    /// resolved silently.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duplicate_keys_b: Vec<String>,
}

impl ReconReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Entries that need attention (everything except `Matched`).
    pub fn problems(&self) -> impl Iterator<Item = &ReconEntry> {
        self.entries
            .iter()
            .filter(|e| e.status != ReconStatus::Matched)
    }
}
