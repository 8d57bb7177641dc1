//! Contact Assistant - Main entry point
//!
//! Interactive address-book assistant: stores contacts with phone numbers
//! and birthdays, computes weekend-adjusted birthday reminders, and keeps
//! the book on disk between sessions.

use anyhow::Result;
use contact_assistant::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep the prompt readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Book file: {}", config.book_path.display());

    if let Err(e) = repl::run(&config) {
        error!("Assistant exited with error: {}", e);
        return Err(e);
    }

    Ok(())
}
