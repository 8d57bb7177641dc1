//! Configuration management for the contact assistant.
//!
//! This module handles loading configuration from environment variables,
//! with a `.env` file picked up when present. Every variable has a
//! default, so a bare `contact-assistant` invocation works out of the box.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted book file
    pub book_path: PathBuf,

    /// How many days ahead the `birthdays` command looks (default: 7)
    pub horizon_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: book file path (default: `addressbook.json`)
    /// - `BIRTHDAY_HORIZON_DAYS`: reminder window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if one exists, without failing when absent.
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("addressbook.json"));

        let horizon_days = Self::parse_env_i64("BIRTHDAY_HORIZON_DAYS", 7)?;
        if horizon_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            horizon_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("addressbook.json"),
            horizon_days: 7,
            log_level: "error".to_string(),
        }
    }
}
