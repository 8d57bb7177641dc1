//! Contact Assistant - an interactive address book with birthday reminders.
//!
//! This library implements the assistant's core: validated contact fields,
//! the address book and its records, birthday-reminder computation, JSON
//! persistence, and the command operations the interactive loop dispatches
//! to.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the address book and its contact records
//! - **commands**: the named operations (add, change, birthdays, ...)
//! - **storage**: load/save the whole book as one JSON document
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling
//! - **repl**: the interactive command loop (thin dispatch glue)

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, StorageError, StorageResult};
pub use models::{AddressBook, ContactRecord, UpcomingBirthday};
