//! Validated contact fields.
//!
//! Every field is a string wrapper with one validation rule. Values are
//! checked at construction and on every reassignment, so no field can hold
//! an invalid value.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
