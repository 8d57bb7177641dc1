//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An upcoming birthday hit produced by [`ContactRecord::upcoming_birthday`].
///
/// `date` is the congratulation date, already rolled forward past weekends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact whose birthday is coming up
    pub name: String,

    /// Weekend-adjusted congratulation date
    pub date: NaiveDate,
}

/// A single contact in the address book.
///
/// The name is the record's immutable identity; the phone list is ordered
/// and may contain duplicates (nothing in the contract forbids adding the
/// same number twice). The birthday is optional and overwritten on re-add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with an empty phone list and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the phone list in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// No duplicate check: adding a number the contact already has results
    /// in two identical entries.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`, in place.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Validation` if `new_raw` is not a valid phone
    /// number, or `CommandError::PhoneNotFound` if no entry matches
    /// `old_raw`.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> CommandResult<()> {
        let new_phone = PhoneNumber::new(new_raw)?;

        match self.phones.iter().position(|p| p.as_str() == old_raw) {
            Some(index) => {
                self.phones[index] = new_phone;
                Ok(())
            }
            None => Err(CommandError::PhoneNotFound(old_raw.to_string())),
        }
    }

    /// Validate `raw` and return the first matching phone, if any.
    ///
    /// A miss is a routine lookup result, not an error.
    pub fn find_phone(&self, raw: &str) -> Result<Option<&PhoneNumber>, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Remove every phone equal to `raw` (plain string compare, no
    /// validation). Returns whether anything was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        self.phones.len() != before
    }

    /// Validate `raw` and set it as the birthday, overwriting any previous
    /// value.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Compute the upcoming-birthday reminder relative to `reference`.
    ///
    /// Returns `None` when no birthday is set, or when the next occurrence
    /// does not fall within `horizon_days` of `reference`. The horizon
    /// check uses the unadjusted occurrence; the returned date is rolled
    /// past weekends, so a Saturday birthday exactly `horizon_days` away
    /// still counts even though its congratulation date lands later.
    pub fn upcoming_birthday(
        &self,
        reference: NaiveDate,
        horizon_days: i64,
    ) -> Option<UpcomingBirthday> {
        let birthday = self.birthday.as_ref()?.as_date();

        let mut candidate = occurrence_in_year(birthday, reference.year());
        if candidate < reference {
            candidate = occurrence_in_year(birthday, reference.year() + 1);
        }

        let days_until = (candidate - reference).num_days();
        if !(0..=horizon_days).contains(&days_until) {
            return None;
        }

        Some(UpcomingBirthday {
            name: self.name.as_str().to_string(),
            date: roll_forward_weekend(candidate),
        })
    }
}

/// The birthday's occurrence in `year`.
///
/// Feb 29 birthdays fall back to Mar 1 in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}

/// Saturday and Sunday occurrences are celebrated the following Monday.
fn roll_forward_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        match &self.birthday {
            Some(birthday) => write!(
                f,
                "Contact name: {}, phones: {}, birthday: {}",
                self.name, phones, birthday
            ),
            None => write!(f, "Contact name: {}, phones: {}", self.name, phones),
        }
    }
}
