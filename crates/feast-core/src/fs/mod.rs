//! File system abstractions for Feast.
//!
//! This module provides the [`entry::FileEntry`] snapshot type and the two
//! synchronous calls the file browser needs: [`ops::read_directory`] and
//! [`ops::stat`].

pub mod entry;
pub mod ops;

pub use entry::EntryKind;
