//! JSON file storage.
//!
//! The snapshot is a single JSON object mapping each name to its record.
//! Every save rewrites the file in place; there is no locking and no
//! atomic replace, so a crash mid-write can truncate the file.

use super::traits::{RecordMap, RecordStore};
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when no path is configured.
pub const DEFAULT_STORAGE_PATH: &str = "address_book.json";

/// Stores the address book as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reject snapshots whose keys disagree with the record names.
    fn check_keys(records: &RecordMap) -> StorageResult<()> {
        for (key, record) in records {
            if key != record.get_name() {
                return Err(StorageError::Corrupt(format!(
                    "key {:?} holds record named {:?}",
                    key,
                    record.get_name()
                )));
            }
        }
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<RecordMap>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No storage file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let records: RecordMap = serde_json::from_slice(&bytes)?;
        Self::check_keys(&records)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded address book"
        );
        Ok(Some(records))
    }

    fn save(&self, records: &RecordMap) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, json)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Saved address book"
        );
        Ok(())
    }
}
