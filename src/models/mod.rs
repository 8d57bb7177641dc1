//! Data structures for the address book and its contact records.

pub mod book;
pub mod record;

pub use book::AddressBook;
pub use record::{ContactRecord, UpcomingBirthday};
