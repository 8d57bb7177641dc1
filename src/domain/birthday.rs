//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The canonical textual form used for parsing, display, and storage.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for contact birthdays.
///
/// This ensures that birthdays are validated at construction time. Input
/// is parsed as `DD.MM.YYYY` and must denote a real calendar date; the
/// stored value always renders back in the same canonical, zero-padded
/// form regardless of how the input was padded.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("1.1.2020").unwrap();
/// assert_eq!(birthday.to_string(), "01.01.2020");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match the `DD.MM.YYYY` pattern
    /// - Must denote an existing calendar date (`31.02.2024` is rejected)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not
    /// parse as a real date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw))
    }

    /// Get the underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the canonical string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - always zero-padded
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
