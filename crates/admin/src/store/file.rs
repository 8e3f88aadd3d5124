//! File-backed storage: one JSON file per key under a data directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::{StorageBackend, StoreError};

/// On-disk backend used by the CLI.
///
/// Each key maps to `<data_dir>/<key with ':' replaced by '_'>.json`, so
/// `petstore:promotions` lives in `petstore_promotions.json`.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `data_dir`, creating the directory and any
    /// missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key.replace(':', "_")))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
