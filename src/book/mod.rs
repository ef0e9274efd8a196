//! The address book collection and its helpers.

mod address_book;
mod clock;
mod pages;

pub use address_book::AddressBook;
pub use clock::{Clock, FixedClock, SystemClock};
pub use pages::RecordPages;
