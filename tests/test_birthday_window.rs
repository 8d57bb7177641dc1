//! End-to-end tests for the birthday reminder window.
//!
//! Reference dates are fixed so the weekend roll-forward and horizon
//! arithmetic are deterministic. 2024-06-10 is a Monday.

use chrono::NaiveDate;
use contact_assistant::commands;
use contact_assistant::AddressBook;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn book_with(name: &str, birthday: &str) -> AddressBook {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&[name, "1112223333"]), &mut book).unwrap();
    commands::add_birthday(&args(&[name, birthday]), &mut book).unwrap();
    book
}

#[test]
fn test_no_birthdays_message() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["Ann", "1112223333"]), &mut book).unwrap();

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    assert_eq!(message, "No birthdays in the next 7 days.");
}

#[test]
fn test_saturday_birthday_congratulated_on_monday() {
    // 2024-06-15 is a Saturday.
    let book = book_with("Ann", "15.06.1990");

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    assert_eq!(message, "Ann's congratulation date: 17.06.2024");
}

#[test]
fn test_sunday_birthday_congratulated_on_monday() {
    // 2024-06-16 is a Sunday.
    let book = book_with("Ann", "16.06.1990");

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    assert_eq!(message, "Ann's congratulation date: 17.06.2024");
}

#[test]
fn test_weekday_birthday_kept_as_is() {
    // 2024-06-12 is a Wednesday.
    let book = book_with("Ann", "12.06.1990");

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    assert_eq!(message, "Ann's congratulation date: 12.06.2024");
}

#[test]
fn test_passed_birthday_excluded() {
    // One day before the reference: the occurrence rolls to next year,
    // far outside the window.
    let book = book_with("Ann", "09.06.1990");

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    assert_eq!(message, "No birthdays in the next 7 days.");
}

#[test]
fn test_boundary_weekend_birthday_adjusts_past_horizon() {
    // The horizon check runs on the unadjusted date. Birthday 2024-06-15
    // (Saturday) is exactly 7 days from reference 2024-06-08, so it is
    // included even though the congratulation date, 17.06, lands 9 days
    // out - one hop past the nominal window.
    let reference = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
    let book = book_with("Ann", "15.06.1990");

    let message = commands::birthdays(&book, reference, 7).unwrap();
    assert_eq!(message, "Ann's congratulation date: 17.06.2024");
}

#[test]
fn test_multiple_contacts_listed_in_book_order() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["Zoe", "1112223333"]), &mut book).unwrap();
    commands::add_birthday(&args(&["Zoe", "14.06.1990"]), &mut book).unwrap();
    commands::add_contact(&args(&["Ann", "4445556666"]), &mut book).unwrap();
    commands::add_birthday(&args(&["Ann", "12.06.1985"]), &mut book).unwrap();

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines[0], "Zoe's congratulation date: 14.06.2024");
    assert_eq!(lines[1], "Ann's congratulation date: 12.06.2024");
}

#[test]
fn test_custom_horizon() {
    // 2024-06-20 is 10 days out; only visible with a wider horizon.
    let book = book_with("Ann", "20.06.1990");

    let message = commands::birthdays(&book, monday(), 7).unwrap();
    assert_eq!(message, "No birthdays in the next 7 days.");

    let message = commands::birthdays(&book, monday(), 14).unwrap();
    assert_eq!(message, "Ann's congratulation date: 20.06.2024");
}
