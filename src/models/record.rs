//! Record model: one contact's complete data.

use crate::error::{RecordError, RecordResult, ValidationResult};
use crate::models::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A single contact: a validated name, an optional birthday, and an
/// insertion-ordered list of phone numbers with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    birthday: Option<Birthday>,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with a name and optional `YYYY-MM-DD` birthday.
    ///
    /// Fails if the name is blank or the birthday string does not parse.
    pub fn new(name: &str, birthday: Option<&str>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            birthday: birthday.map(Birthday::new).transpose()?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Set or replace the birthday from a `YYYY-MM-DD` string.
    pub fn set_birthday(&mut self, raw: &str) -> ValidationResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days from today until the next occurrence of the birthday, or `None`
    /// when no birthday is set.
    ///
    /// Uses this year's occurrence of the month/day unless it is strictly in
    /// the past, in which case next year's is used. A birthday falling on
    /// today returns 0. Feb 29 birthdays fall back to Mar 1 in non-leap
    /// years.
    pub fn days_to_birthday(&self) -> Option<i64> {
        let birthday = self.birthday?;
        let today = Local::now().date_naive();

        let mut next = occurrence_in(today.year(), birthday.date());
        if next < today {
            next = occurrence_in(today.year() + 1, birthday.date());
        }
        Some((next - today).num_days())
    }

    /// Validate and append a phone number.
    ///
    /// Adding a phone that is already present is a no-op, keeping the
    /// no-duplicates invariant without treating it as an error.
    pub fn add_phone(&mut self, raw: &str) -> ValidationResult<()> {
        let phone = Phone::new(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove the phone equal to `raw`; no-op when absent.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace `old` with `new`.
    ///
    /// Fails with [`RecordError::PhoneNotFound`] when `old` is not on the
    /// record (checked before `new` is validated). The replacement is
    /// validated before the list is touched, so a bad `new` value leaves
    /// the phones exactly as they were.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let replacement = Phone::new(new)?;
        self.phones.remove(idx);
        if !self.phones.contains(&replacement) {
            self.phones.push(replacement);
        }
        Ok(())
    }

    /// Find the stored phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

/// The birthday's occurrence within `year`. Feb 29 maps to Mar 1 when
/// `year` is not a leap year.
fn occurrence_in(year: i32, birthday: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| {
            // only reachable for Feb 29 in a non-leap year
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap()
        })
}
