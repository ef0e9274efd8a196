//! Data models for the contact book.

pub mod record;

pub use record::{BirthdayCountdown, Record};
