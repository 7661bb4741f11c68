//! Contact Directory - an in-memory, validated contact list.
//!
//! Every contact field is checked against its rule on construction and on
//! every update, and the directory keeps contact IDs unique.
//!
//! # Architecture
//!
//! - **domain**: Field value objects and the shared validators behind them
//! - **models**: The validated `Contact` record and unvalidated `ContactDraft` input
//! - **directory**: The ID-keyed `Directory` and its thread-safe `SharedDirectory` handle
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup for the `tracing` events operations emit

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use config::DirectoryConfig;
pub use directory::{Directory, SharedDirectory};
pub use domain::{Field, ValidationError};
pub use error::{ConfigError, DirectoryError, LookupError};
pub use models::{Contact, ContactDraft};
pub use observability::init_logging;
