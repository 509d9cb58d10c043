mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Refuse to clobber an existing output file unless `force` is set.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

/// Write the filtered record set (every page, not just the visible one)
/// to `file` in the requested format.
pub fn export_records(
    records: &[&Record],
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(path, records)?,
        ExportFormat::Json => json::write_json(path, records)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
