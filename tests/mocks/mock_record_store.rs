use contact_book::error::{StorageError, StorageResult};
use contact_book::storage::{RecordMap, RecordStore};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Keeps the last saved snapshot in memory, can be told to fail saves, and
/// tracks method calls for verification. Clones share state, so a test can
/// keep one handle after moving another into an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStore {
    snapshot: Arc<Mutex<Option<RecordMap>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a store with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_snapshot(records: RecordMap) -> Self {
        let store = Self::new();
        *store.snapshot.lock().unwrap() = Some(records);
        store
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last successfully saved snapshot.
    pub fn snapshot(&self) -> Option<RecordMap> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStore for MockRecordStore {
    fn load(&self) -> StorageResult<Option<RecordMap>> {
        self.increment_call_count("load");
        Ok(self.snapshot())
    }

    fn save(&self, records: &RecordMap) -> StorageResult<()> {
        self.increment_call_count("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }
        *self.snapshot.lock().unwrap() = Some(records.clone());
        Ok(())
    }
}
