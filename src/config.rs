//! Configuration management for the contact directory.
//!
//! Settings are read from environment variables, with a `.env` file loaded
//! first when present. Field rules are fixed and not configurable.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for a [`Directory`](crate::Directory) and its logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Number of contacts to reserve space for up front (default: 0)
    pub initial_capacity: usize,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DIRECTORY_INITIAL_CAPACITY`: Contacts to pre-allocate (default: 0)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let initial_capacity =
            Self::parse_env_usize("DIRECTORY_INITIAL_CAPACITY", defaults.initial_capacity)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(DirectoryConfig {
            initial_capacity,
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

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            initial_capacity: 0,
            log_level: "error".to_string(),
        }
    }
}
