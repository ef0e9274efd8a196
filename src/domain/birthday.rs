//! Birthday field.

use super::errors::ValidationError;
use super::field::{Field, Slot};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted birthday layout, e.g. `12-01-1990`.
pub const BIRTHDAY_FORMAT: &str = "%m-%d-%Y";

// Two-digit month, one- or two-digit day, four-digit year. chrono alone
// accepts short years, signs and padding spaces.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{1,2}-[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// An optional birthday stored as its `MM-DD-YYYY` text.
///
/// The empty string means "no birthday set". Any other value must parse
/// as `MM-D(D)-YYYY` under [`BIRTHDAY_FORMAT`]; calendar checks are whatever
/// the parser enforces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday. Empty input yields an unset birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if a non-empty value fails to parse.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();
        Self::validate(&birthday)?;
        Ok(Self(birthday))
    }

    /// A birthday with no date set.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }

    /// The parsed date, if one is set.
    pub fn date(&self) -> Option<NaiveDate> {
        if !self.is_set() {
            return None;
        }
        NaiveDate::parse_from_str(&self.0, BIRTHDAY_FORMAT).ok()
    }
}

impl Slot for Birthday {
    fn slot(&mut self) -> &mut String {
        &mut self.0
    }
}

impl Field for Birthday {
    fn validate(raw: &str) -> Result<(), ValidationError> {
        if raw.is_empty() {
            return Ok(());
        }
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
