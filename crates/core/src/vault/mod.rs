//! Vault file discovery.
//!
//! This module provides the read-only snapshot of a vault that map
//! generation works from: every file with its path-derived names and
//! timestamps, plus the list of folders.

pub mod entry;
pub mod walker;

pub use entry::FileEntry;
pub use walker::{ScanError, VaultSnapshot};
