use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One data row keyed by header name.
///
/// An absent header reads as the empty string; the distinction between
/// "empty" and "absent" only matters when building records from short rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(header.into(), value.into());
    }

    /// Value for `header`, or `""` when the record does not carry it.
    pub fn get(&self, header: &str) -> &str {
        self.fields.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, header: &str) -> bool {
        self.fields.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Parsed table: ordered headers plus one record per data row.
///
/// Invariant: every record carries exactly the table's headers as keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    /// Build a table from positional rows. The first row names the columns;
    /// every following row is zipped against it. Short rows are padded with
    /// empty strings, fields beyond the header count are dropped.
    ///
    /// Returns `None` when there is no header row to work with.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let mut rows = rows.into_iter();
        let headers = rows.next()?;

        let records = rows
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
                    .collect()
            })
            .collect();

        Some(Self { headers, records })
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
