//! Contact Book - a personal contact directory.
//!
//! Stores contacts with a name, phone numbers and an optional birthday,
//! validates every field on write, and keeps the whole directory in a JSON
//! file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The address book collection, paging and clock
//! - **storage**: Snapshot persistence
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, Clock, FixedClock, RecordPages, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use models::{BirthdayCountdown, Record};
pub use storage::{JsonFileStore, RecordMap, RecordStore};
