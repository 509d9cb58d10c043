use crate::models::Record;
use std::path::Path;

/// Write the records as a pretty-printed JSON array, keyed exactly like the
/// data source so an export can be fed straight back in.
pub fn write_json(path: &Path, records: &[&Record]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)
}
