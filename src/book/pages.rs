//! Paging iterator over the records of an address book.

use crate::models::Record;
use indexmap::map::Values;

/// Walks records in insertion order.
///
/// The requested chunk size is kept for callers that page their output,
/// but each step yields a single record whatever the chunk size.
pub struct RecordPages<'a> {
    records: Values<'a, String, Record>,
    chunk_size: usize,
}

impl<'a> RecordPages<'a> {
    pub(crate) fn new(records: Values<'a, String, Record>, chunk_size: usize) -> Self {
        Self {
            records,
            chunk_size: chunk_size.max(1),
        }
    }

    /// The chunk size this iterator was created with (at least 1).
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<'a> Iterator for RecordPages<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for RecordPages<'_> {}
