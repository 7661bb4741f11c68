//! Observability module.
//!
//! Directory operations emit `tracing` events; this module installs the
//! subscriber that writes them out.

pub mod logging;

pub use logging::init_logging;
