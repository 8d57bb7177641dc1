//! Persistence gateway for the address book.
//!
//! The whole book is written as one JSON document. `load` immediately
//! after `save` yields an observationally identical book: same names in
//! the same order, same phone lists, same birthdays.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Serialize `book` to `path`.
///
/// The document is written to a sibling temp file and renamed over the
/// target, so a crash mid-write never leaves a truncated book behind.
pub fn save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    debug!("Saved {} contacts to {}", book.len(), path.display());
    Ok(())
}

/// Deserialize the book from `path`.
///
/// A missing file is not an error: the assistant starts with an empty
/// book on first run. Any other I/O failure, or a file that does not
/// parse as a book, is surfaced as a `StorageError`.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No book file at {}, starting empty", path.display());
            return Ok(AddressBook::new());
        }
        Err(e) => return Err(e.into()),
    };

    let book: AddressBook = serde_json::from_str(&contents)?;
    debug!("Loaded {} contacts from {}", book.len(), path.display());
    Ok(book)
}
