//! The validated scalar holder shared by every contact field.
//!
//! A [`Field`] owns exactly one string value. Construction and reassignment
//! both run the field's validation rule first, so a rejected value never
//! touches the stored one.

use super::errors::ValidationError;

mod sealed {
    /// Write access to the stored value, only reachable through
    /// [`super::Field::set_value`].
    pub trait Slot {
        fn slot(&mut self) -> &mut String;
    }
}

pub(crate) use sealed::Slot;

/// A value wrapper whose only behavior is its validation rule.
pub trait Field: Slot + Sized {
    /// Check a raw value against this field's rule.
    fn validate(raw: &str) -> Result<(), ValidationError>;

    /// The current value.
    fn value(&self) -> &str;

    /// Replace the value, validating first.
    ///
    /// # Errors
    ///
    /// Returns the field's `ValidationError` and leaves the old value in place.
    fn set_value(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        let raw = raw.into();
        Self::validate(&raw)?;
        *self.slot() = raw;
        Ok(())
    }
}
