//! In-memory contact directory.
//!
//! [`Directory`] owns its contacts and enforces ID uniqueness. Field
//! validation is delegated to the [`Contact`](crate::Contact) setters.
//! [`SharedDirectory`] wraps it for callers on several threads.

mod contact_directory;
mod shared;

pub use contact_directory::Directory;
pub use shared::SharedDirectory;
