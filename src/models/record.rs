//! Record model: one contact with a name, an optional birthday and phones.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Text shown instead of a zero-day countdown.
pub const HAPPY_BIRTHDAY: &str = "Happy Birthday!";

/// Time left until a contact's next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayCountdown {
    /// The birthday is today.
    Today,
    /// The birthday is this many days away (always at least 1).
    InDays(u32),
}

impl BirthdayCountdown {
    /// Number of days to wait, `0` for today.
    pub fn days(&self) -> u32 {
        match self {
            Self::Today => 0,
            Self::InDays(days) => *days,
        }
    }
}

impl fmt::Display for BirthdayCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "{}", HAPPY_BIRTHDAY),
            Self::InDays(days) => write!(f, "{}", days),
        }
    }
}

/// A single contact.
///
/// The name is the identity key: equality and hashing only look at it, so
/// a record found twice during a search collapses to one entry in a set.
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    birthday: Birthday,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no birthday and no phones.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the name is blank.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            birthday: Birthday::unset(),
            phones: Vec::new(),
        })
    }

    /// Create a record with a birthday in `MM-DD-YYYY` form.
    /// An empty birthday string leaves it unset.
    pub fn with_birthday(name: impl Into<String>, birthday: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            birthday: Birthday::new(birthday)?,
            phones: Vec::new(),
        })
    }

    pub fn get_name(&self) -> &str {
        self.name.value()
    }

    /// Snapshot of the phone values in insertion order.
    pub fn get_phones(&self) -> Vec<String> {
        self.phones.iter().map(|p| p.value().to_string()).collect()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday text, if one is set.
    pub fn birthday(&self) -> Option<&str> {
        self.birthday.is_set().then(|| self.birthday.value())
    }

    /// Set or replace the birthday. An empty string clears it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` and keeps the old birthday on a bad date.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> BookResult<()> {
        self.birthday.set_value(raw)?;
        Ok(())
    }

    /// Validate and append a phone.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no phone equals `old`.
    /// - `BookError::Validation` if `new` is invalid; the entry keeps `old`.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.value() == old)
            .ok_or_else(|| BookError::NotFound("phone".to_string()))?;
        phone.set_value(new)?;
        Ok(())
    }

    /// First phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == value)
    }

    /// Remove the first phone equal to `value`. Does nothing if absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.value() == value) {
            self.phones.remove(index);
        }
    }

    /// Whether the name or any phone contains `term` (case-sensitive).
    pub fn matches(&self, term: &str) -> bool {
        self.name.value().contains(term) || self.phones.iter().any(|p| p.value().contains(term))
    }

    /// Days from `today` until the next birthday, or `None` if none is set.
    ///
    /// A birthday already passed this year rolls over to next year. Feb 29
    /// birthdays fall on Feb 28 in common years.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<BirthdayCountdown> {
        let born = self.birthday.date()?;

        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }

        let days = u32::try_from((next - today).num_days()).ok()?;
        Some(match days {
            0 => BirthdayCountdown::Today,
            n => BirthdayCountdown::InDays(n),
        })
    }
}

/// The birthday's month and day placed in `year`.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).filter(|_| born.month() == 2))
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.get_phones().join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn john() -> Record {
        Record::with_birthday("John", "12-01-1990").unwrap()
    }

    #[test]
    fn test_record_new_rejects_blank_name() {
        let result = Record::new("   ");
        assert!(matches!(
            result,
            Err(BookError::Validation(ValidationError::NameRequired))
        ));
    }

    #[test]
    fn test_record_with_bad_birthday_fails() {
        let result = Record::with_birthday("John", "1990-12-01");
        assert!(matches!(
            result,
            Err(BookError::Validation(ValidationError::InvalidDate(_)))
        ));
    }

    #[test]
    fn test_add_and_edit_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.edit_phone("1234567890", "1112223333").unwrap();

        assert_eq!(record.get_phones(), vec!["1112223333", "5555555555"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_list_unchanged() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.get_phones(), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_missing_phone_is_not_found() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
        assert_eq!(err.to_string(), "phone not found");
        assert_eq!(record.get_phones(), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_invalid_replacement_keeps_old_value() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("1234567890", "abc").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(record.get_phones(), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_touches_only_first_duplicate() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        record.edit_phone("1234567890", "5555555555").unwrap();

        assert_eq!(record.get_phones(), vec!["5555555555", "1234567890"]);
    }

    #[test]
    fn test_find_and_remove_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        assert_eq!(record.find_phone("5555555555").unwrap().value(), "5555555555");
        assert!(record.find_phone("9999999999").is_none());

        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 2);

        record.remove_phone("1234567890");
        assert_eq!(record.get_phones(), vec!["5555555555"]);
    }

    #[test]
    fn test_days_to_birthday_upcoming() {
        assert_eq!(
            john().days_to_birthday(date(2024, 11, 15)),
            Some(BirthdayCountdown::InDays(16))
        );
    }

    #[test]
    fn test_days_to_birthday_today() {
        let countdown = john().days_to_birthday(date(2024, 12, 1)).unwrap();
        assert_eq!(countdown, BirthdayCountdown::Today);
        assert_eq!(countdown.to_string(), "Happy Birthday!");
        assert_eq!(countdown.days(), 0);
    }

    #[test]
    fn test_days_to_birthday_rolls_to_next_year() {
        assert_eq!(
            john().days_to_birthday(date(2024, 12, 2)),
            Some(BirthdayCountdown::InDays(364))
        );
    }

    #[test]
    fn test_days_to_birthday_unset() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 1, 1)), None);
    }

    #[test]
    fn test_days_to_birthday_leap_day_in_common_year() {
        let record = Record::with_birthday("Leap", "02-29-2000").unwrap();
        assert_eq!(
            record.days_to_birthday(date(2023, 2, 27)),
            Some(BirthdayCountdown::InDays(1))
        );
        assert_eq!(
            record.days_to_birthday(date(2024, 2, 28)),
            Some(BirthdayCountdown::InDays(1))
        );
        assert_eq!(
            record.days_to_birthday(date(2023, 2, 28)),
            Some(BirthdayCountdown::Today)
        );
    }

    #[test]
    fn test_set_birthday() {
        let mut record = Record::new("Jane").unwrap();
        assert_eq!(record.birthday(), None);

        record.set_birthday("07-04-1985").unwrap();
        assert_eq!(record.birthday(), Some("07-04-1985"));

        assert!(record.set_birthday("July 4").is_err());
        assert_eq!(record.birthday(), Some("07-04-1985"));

        record.set_birthday("").unwrap();
        assert_eq!(record.birthday(), None);
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("John").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: ");

        record.add_phone("1112223333").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_record_equality_by_name() {
        let mut a = Record::new("Ann").unwrap();
        a.add_phone("1234567890").unwrap();
        let b = Record::new("Ann").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Record::new("Bob").unwrap());
    }

    #[test]
    fn test_matches_name_or_phone() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();

        assert!(record.matches("An"));
        assert!(record.matches("456"));
        assert!(!record.matches("ann"));
        assert!(!record.matches("999"));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = john();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(back.get_name(), "John");
        assert_eq!(back.birthday(), Some("12-01-1990"));
        assert_eq!(back.get_phones(), vec!["5555555555", "1234567890"]);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John","birthday":"","phones":["123"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
