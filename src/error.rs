//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Domain validation errors live in [`crate::domain`] and
//! are wrapped here so command operations expose a single error surface.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a command operation.
///
/// Routine "not found" lookups (`find`, `remove_phone`, `delete`) are NOT
/// errors; they return `Option`/`bool`. These variants cover structural
/// misuse and bad input, and are translated to user-facing text at the
/// command-loop boundary.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Referenced contact does not exist
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Referenced phone number does not exist on the contact
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Too few arguments supplied to a command
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file did not parse as a valid book
    #[error("Malformed book file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
