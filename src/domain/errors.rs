//! Field validation errors.

use std::fmt;

/// Errors raised when a field value fails its validation rule.
///
/// The offending raw value is kept for diagnostics but is not part of the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty or whitespace only.
    NameRequired,

    /// The phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The birthday does not parse as `MM-DD-YYYY`.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "name required"),
            Self::InvalidPhone(_) => write!(f, "phone must be exactly 10 digits"),
            Self::InvalidDate(_) => write!(f, "invalid date format"),
        }
    }
}

impl std::error::Error for ValidationError {}
