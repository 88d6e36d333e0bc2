//! Validated field newtypes for contact records.
//!
//! Each field is a thin wrapper whose constructor and setter run a pure
//! validation predicate over the candidate value. A failed write leaves the
//! previously held value untouched.

use crate::error::{ValidationError, ValidationResult};
use chrono::NaiveDate;
use std::fmt;

/// Format accepted for birthday input and used for rendering.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A contact's name. Non-empty after trimming surrounding whitespace.
///
/// The trimmed form is what gets stored, and it doubles as the record's
/// identity key inside the address book. Renaming a stored contact is
/// delete + re-add territory, not a field mutation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Replace the value; on validation failure the old value is kept.
    pub fn set(&mut self, raw: &str) -> ValidationResult<()> {
        *self = Self::new(raw)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly 10 ASCII decimal digits.
///
/// Equality is exact string match; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> ValidationResult<Self> {
        if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPhone(raw.to_string()))
        }
    }

    /// Replace the value; on validation failure the old value is kept.
    pub fn set(&mut self, raw: &str) -> ValidationResult<()> {
        *self = Self::new(raw)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday: a calendar date parsed from `YYYY-MM-DD`, no time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> ValidationResult<Self> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Replace the value; on validation failure the old value is kept.
    pub fn set(&mut self, raw: &str) -> ValidationResult<()> {
        *self = Self::new(raw)?;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("   "), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_trims() {
        let name = Name::new("  Anna  ").unwrap();
        assert_eq!(name.as_str(), "Anna");
        assert_eq!(name.to_string(), "Anna");
    }

    #[test]
    fn test_name_set_keeps_old_value_on_failure() {
        let mut name = Name::new("Anna").unwrap();
        assert!(name.set("   ").is_err());
        assert_eq!(name.as_str(), "Anna");

        name.set("Bob").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }

    #[test]
    fn test_phone_accepts_exactly_ten_digits() {
        assert!(Phone::new("0991234567").is_ok());
        assert!(Phone::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_bad_input() {
        for raw in ["", "123", "12345678901", "099123456a", "099-123-45", "٠٩٩١٢٣٤٥٦٧"] {
            let err = Phone::new(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidPhone(raw.to_string()));
        }
    }

    #[test]
    fn test_phone_set_keeps_old_value_on_failure() {
        let mut phone = Phone::new("0991234567").unwrap();
        assert!(phone.set("nope").is_err());
        assert_eq!(phone.as_str(), "0991234567");
    }

    #[test]
    fn test_birthday_parses_valid_dates() {
        let bday = Birthday::new("1990-05-01").unwrap();
        assert_eq!(bday.to_string(), "1990-05-01");
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());

        // leap day is a real date
        assert!(Birthday::new("2000-02-29").is_ok());
    }

    #[test]
    fn test_birthday_rejects_malformed_and_out_of_range() {
        for raw in ["", "1990/05/01", "01-05-1990", "1990-13-01", "1990-02-30", "1999-02-29"] {
            let err = Birthday::new(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidBirthday(raw.to_string()));
        }
    }
}
