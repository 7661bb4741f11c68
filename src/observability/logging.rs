//! Structured logging setup.

use crate::config::DirectoryConfig;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.log_level`. Returns `true` if this call installed the subscriber
/// and `false` if one was already in place.
pub fn init_logging(config: &DirectoryConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
