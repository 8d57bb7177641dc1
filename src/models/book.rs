//! Address book: the full collection of contact records, keyed by name.

use crate::models::record::{ContactRecord, UpcomingBirthday};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The address book.
///
/// Records are keyed by contact name; the key always equals the name of
/// the record it maps to, and there is at most one record per name
/// (inserting under an existing name overwrites). Insertion order is
/// preserved for whole-book listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record` under its own name, overwriting any existing record
    /// with that name. An overwrite keeps the record's original position.
    pub fn add_record(&mut self, record: ContactRecord) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name. A miss is not an error.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, preserving the order of the rest.
    /// Returns whether a record was removed; deleting a missing name is
    /// not an error.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.shift_remove(name).is_some()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Collect every record's upcoming birthday within `horizon_days` of
    /// `reference`, in book order.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        horizon_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| record.upcoming_birthday(reference, horizon_days))
            .collect()
    }
}

// Serde support - serialize as a sequence of records. Keys are rebuilt from
// record names on deserialize, so the name-equals-key invariant holds by
// construction even for hand-edited files.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address Book is empty.");
        }

        let mut listing = String::from("Address Book:");
        for record in self.records.values() {
            listing.push('\n');
            listing.push_str(&record.to_string());
        }
        // A record with no phones leaves a dangling space; trim it off.
        write!(f, "{}", listing.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;

    fn record(name: &str) -> ContactRecord {
        ContactRecord::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann"));

        assert!(book.find("Ann").is_some());
        assert!(book.find("Bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();

        let mut ann = record("Ann");
        ann.add_phone("1112223333").unwrap();
        book.add_record(ann);

        // A fresh record under the same name replaces the old one outright.
        book.add_record(record("Ann"));

        assert_eq!(book.len(), 1);
        assert!(book.find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_an_error() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann"));

        assert!(!book.delete("Bob"));
        assert_eq!(book.len(), 1);
        assert!(book.delete("Ann"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zoe"));
        book.add_record(record("Ann"));
        book.add_record(record("Bob"));

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Ann", "Bob"]);

        book.delete("Ann");
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Bob"]);
    }

    #[test]
    fn test_display_empty() {
        let book = AddressBook::new();
        assert_eq!(book.to_string(), "Address Book is empty.");
    }

    #[test]
    fn test_display_lists_records() {
        let mut book = AddressBook::new();
        let mut ann = record("Ann");
        ann.add_phone("1112223333").unwrap();
        book.add_record(ann);
        book.add_record(record("Bob"));

        let listing = book.to_string();
        assert!(listing.starts_with("Address Book:"));
        assert!(listing.contains("Contact name: Ann, phones: 1112223333"));
        assert!(listing.ends_with("Contact name: Bob, phones:"));
    }

    #[test]
    fn test_serialization_round_trip_preserves_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zoe"));
        let mut ann = record("Ann");
        ann.add_phone("1112223333").unwrap();
        ann.add_birthday("15.06.1990").unwrap();
        book.add_record(ann);

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);

        let names: Vec<&str> = back.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Ann"]);
    }
}
