use crate::error::StorageResult;
use crate::models::Record;
use indexmap::IndexMap;

/// Records keyed by name, in insertion order.
pub type RecordMap = IndexMap<String, Record>;

/// Storage for the full address book snapshot.
///
/// Provides abstraction over where the snapshot lives, enabling
/// different implementations (JSON file, in-memory mock).
pub trait RecordStore {
    /// Read the stored snapshot. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<RecordMap>>;

    /// Overwrite the stored snapshot with `records`.
    fn save(&self, records: &RecordMap) -> StorageResult<()>;
}
