//! Free-text filtering over the record set.
//!
//! A query is a raw case-insensitive substring; a record matches when the
//! query occurs in at least one of its eight text fields. No tokenization,
//! no fuzzy matching.

use crate::models::Record;

/// True when `query` (case-insensitive) is a substring of any field.
/// The empty query matches everything.
pub fn matches(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .fields()
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

/// Order-preserving subset of `records` matching `query`.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.fields().iter().any(|f| f.to_lowercase().contains(&needle)))
        .collect()
}
