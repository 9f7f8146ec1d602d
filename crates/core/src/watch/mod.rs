//! Automatic regeneration driven by file system events.

pub mod events;
pub mod runner;

pub use events::{EventClass, EventClassifier};
pub use runner::{VaultWatcher, WatchError};
