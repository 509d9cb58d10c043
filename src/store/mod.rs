//! Record store: loads the JSON data source once and caches the parsed
//! records for the lifetime of the store.

use crate::errors::{AppError, AppResult};
use crate::models::Record;
use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
    cache: OnceCell<Vec<Record>>,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record set. The first successful call parses the file and
    /// fills the cache; later calls return the cached slice. Errors are not
    /// cached, so a fixed data file is picked up on the next call.
    pub fn load(&self) -> AppResult<&[Record]> {
        self.cache
            .get_or_try_init(|| self.read_from_disk())
            .map(Vec::as_slice)
    }

    fn read_from_disk(&self) -> AppResult<Vec<Record>> {
        let display = self.path.display().to_string();

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::DataNotFound(display));
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        serde_json::from_str::<Vec<Record>>(&content)
            .map_err(|_| AppError::MalformedData(display))
    }
}
