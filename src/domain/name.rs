//! Name field.

use super::errors::ValidationError;
use super::field::{Field, Slot};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact name. Never empty or whitespace only.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.value(), "John");
/// assert!(Name::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it has visible content.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameRequired` for empty or blank input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }
}

impl Slot for Name {
    fn slot(&mut self) -> &mut String {
        &mut self.0
    }
}

impl Field for Name {
    fn validate(raw: &str) -> Result<(), ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
