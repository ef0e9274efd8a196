//! Persistence for the address book.
//!
//! The book writes its whole name -> record map through a [`RecordStore`]
//! after each mutation and reads it back once when opened.

mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, DEFAULT_STORAGE_PATH};
pub use traits::{RecordMap, RecordStore};
