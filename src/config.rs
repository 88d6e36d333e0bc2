//! Configuration for the rolodex binary.
//!
//! All settings come from environment variables (with a `.env` file loaded
//! when present) and every one of them has a default, so the tool runs with
//! zero setup.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the persisted address book, relative to the
/// working directory.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book JSON file lives
    pub book_path: PathBuf,

    /// Entries per page for `show-all` (default: 5, must be > 0)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_BOOK_PATH`: path of the persisted book (default `address_book.json`)
    /// - `ROLODEX_PAGE_SIZE`: entries per page (default 5)
    /// - `LOG_LEVEL`: logging level (default "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; a missing file is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("ROLODEX_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        let page_size = Self::parse_env_usize("ROLODEX_PAGE_SIZE", 5)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: 5,
            log_level: "error".to_string(),
        }
    }
}
