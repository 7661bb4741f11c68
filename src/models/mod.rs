//! Data models for the contact directory.
//!
//! This module contains the validated [`Contact`] record and the
//! [`ContactDraft`] used to carry caller input whose fields may be absent.

pub mod contact;

pub use contact::{Contact, ContactDraft};
