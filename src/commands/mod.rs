//! Command operations over the address book.
//!
//! Each operation takes the raw string arguments produced by the line
//! parser plus the book, and returns either a success message or a
//! [`CommandError`]. Nothing here prints; the command loop renders both
//! outcomes at the boundary.

use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, ContactRecord};
use chrono::NaiveDate;
use tracing::debug;

fn require<'a>(args: &'a [String], index: usize, what: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(what))
}

/// `add <name> <phone>` - find-or-create the contact, then append the phone.
///
/// The phone is always appended, on both the create and the update path;
/// repeating the command with the same phone produces duplicate entries.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = require(args, 0, "name")?;
    let phone = require(args, 1, "phone")?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(ContactRecord::new(Name::new(name)?));
        debug!("Created contact {}", name);
        "Contact added."
    };

    let record = book
        .find_mut(name)
        .expect("record was found or just inserted");
    record.add_phone(phone)?;

    Ok(message.to_string())
}

/// `change <name> <oldPhone> <newPhone>` - replace one phone in place.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = require(args, 0, "name")?;
    let old_phone = require(args, 1, "old phone")?;
    let new_phone = require(args, 2, "new phone")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact changed.".to_string())
}

/// `phone <name>` - list the contact's phone numbers.
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = require(args, 0, "name")?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    Ok(format!("{}'s phone(s): {}", name, phones))
}

/// `all` - the whole-book listing.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    Ok(book.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>` - set the contact's birthday,
/// overwriting any previous value.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = require(args, 0, "name")?;
    let date = require(args, 1, "birthday")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.add_birthday(date)?;

    Ok("Birthday added".to_string())
}

/// `show-birthday <name>` - display the contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = require(args, 0, "name")?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{} : {}", name, birthday)),
        None => Ok(format!("{} has no birthday set.", name)),
    }
}

/// `birthdays` - congratulation dates within the horizon, one per line.
pub fn birthdays(
    book: &AddressBook,
    reference: NaiveDate,
    horizon_days: i64,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(reference, horizon_days);

    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", horizon_days));
    }

    Ok(upcoming
        .iter()
        .map(|entry| {
            format!(
                "{}'s congratulation date: {}",
                entry.name,
                entry.date.format("%d.%m.%Y")
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
