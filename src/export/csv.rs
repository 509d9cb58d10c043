use crate::models::{Record, record};
use csv::Writer;
use std::path::Path;

/// Write the records as CSV, one column per roster field.
pub fn write_csv(path: &Path, records: &[&Record]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(record::HEADERS)?;
    for r in records {
        wtr.write_record(r.fields())?;
    }

    wtr.flush()?;
    Ok(())
}
