// CSV export of uniform records.

use crate::model::Record;

/// Render records back to comma-delimited text: one header line, then one
/// line per record. Every data field is quote-wrapped with internal quotes
/// doubled, so embedded commas and newlines survive a round trip.
///
/// An empty record sequence yields an empty string, not a header-only line.
/// A record missing a header serializes that field as empty.
pub fn to_csv(headers: &[String], records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(","));

    for record in records {
        let fields: Vec<String> = headers
            .iter()
            .map(|h| format!("\"{}\"", record.get(h).replace('"', "\"\"")))
            .collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}
