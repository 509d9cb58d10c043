use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search;
use crate::errors::AppResult;
use crate::export;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        search: query,
        force,
    } = cmd
    {
        // Unlike `view`, a broken data source fails the export outright.
        let store = RecordStore::new(&cfg.data_file);
        let records = store.load()?;

        let filtered = search::filter(records, query.as_deref().unwrap_or(""));
        export::export_records(&filtered, format, file, *force)?;
    }
    Ok(())
}
