//! The address book: records keyed by unique name, persisted on change.

use super::clock::{Clock, SystemClock};
use super::pages::RecordPages;
use crate::error::{BookError, BookResult};
use crate::models::{BirthdayCountdown, Record};
use crate::storage::{RecordMap, RecordStore};
use std::collections::HashSet;

/// A collection of contacts with at most one record per name.
///
/// The book is loaded from its store once, when opened, and writes the full
/// snapshot back after every successful add, edit or delete. If that write
/// fails the in-memory change is undone and the storage error returned.
pub struct AddressBook {
    records: RecordMap,
    store: Box<dyn RecordStore>,
    clock: Box<dyn Clock>,
}

impl AddressBook {
    /// Open a book backed by `store`, loading any saved snapshot.
    ///
    /// A store with nothing saved yields an empty book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Storage` if the snapshot exists but cannot be read.
    pub fn open(store: impl RecordStore + 'static) -> BookResult<Self> {
        let records = store.load()?.unwrap_or_default();
        tracing::info!(count = records.len(), "Address book opened");

        Ok(Self {
            records,
            store: Box::new(store),
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the clock used for birthday queries.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Today's date according to the book's clock.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Insert a new record and persist the book.
    ///
    /// # Errors
    ///
    /// - `BookError::Duplicate` if a record with the same name exists; the
    ///   stored record is kept.
    /// - `BookError::Storage` if saving fails; the record is not added.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let name = record.get_name().to_string();
        if self.records.contains_key(&name) {
            tracing::warn!(name = %name, "Rejected duplicate record");
            return Err(BookError::Duplicate(name));
        }

        self.records.insert(name.clone(), record);
        if let Err(e) = self.save() {
            self.records.shift_remove(&name);
            return Err(e);
        }

        tracing::info!(name = %name, total = self.records.len(), "Record added");
        Ok(())
    }

    /// Exact-match lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Records whose name, or any phone, contains `term`.
    ///
    /// Matching is case-sensitive. A record that matches on both counts
    /// appears once.
    pub fn search(&self, term: &str) -> HashSet<&Record> {
        let found: HashSet<&Record> = self.records.values().filter(|r| r.matches(term)).collect();
        tracing::debug!(term = %term, matches = found.len(), "Search completed");
        found
    }

    /// Apply `change` to the record named `name` and persist the book.
    ///
    /// The change runs on a copy; the stored record is only replaced when it
    /// succeeds, so a failing change leaves the record untouched.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no such record exists.
    /// - Any error returned by `change`.
    /// - `BookError::Storage` if saving fails; the old record is restored.
    pub fn edit<T, F>(&mut self, name: &str, change: F) -> BookResult<T>
    where
        F: FnOnce(&mut Record) -> BookResult<T>,
    {
        let stored = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound("record".to_string()))?;

        let mut draft = stored.clone();
        let output = change(&mut draft)?;
        let previous = std::mem::replace(stored, draft);

        if let Err(e) = self.save() {
            if let Some(slot) = self.records.get_mut(name) {
                *slot = previous;
            }
            return Err(e);
        }

        tracing::info!(name = %name, "Record updated");
        Ok(output)
    }

    /// Remove the record named `name`. Absent names are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Storage` if saving fails; the record is restored
    /// at its previous position.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let Some((index, key, record)) = self.records.shift_remove_full(name) else {
            tracing::debug!(name = %name, "Delete of unknown record ignored");
            return Ok(());
        };

        if let Err(e) = self.save() {
            self.records.shift_insert(index, key, record);
            return Err(e);
        }

        tracing::info!(name = %name, total = self.records.len(), "Record deleted");
        Ok(())
    }

    /// Write the full snapshot to the store.
    pub fn save(&self) -> BookResult<()> {
        self.store.save(&self.records)?;
        Ok(())
    }

    /// Iterate records in insertion order, one per step.
    ///
    /// `chunk_size` is recorded on the iterator but does not batch output.
    /// Each call starts from the first record.
    pub fn iterate(&self, chunk_size: usize) -> RecordPages<'_> {
        RecordPages::new(self.records.values(), chunk_size)
    }

    /// Records whose next birthday is at most `window_days` away, soonest first.
    ///
    /// Ties are ordered by name. Records without a birthday are skipped.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<(&Record, BirthdayCountdown)> {
        let today = self.clock.today();
        let mut upcoming: Vec<(&Record, BirthdayCountdown)> = self
            .records
            .values()
            .filter_map(|r| r.days_to_birthday(today).map(|c| (r, c)))
            .filter(|(_, c)| c.days() <= window_days)
            .collect();

        upcoming.sort_by(|(a, ca), (b, cb)| {
            ca.days()
                .cmp(&cb.days())
                .then_with(|| a.get_name().cmp(b.get_name()))
        });
        upcoming
    }
}
