//! Map settings: typed defaults, lenient merging and persistence.
//!
//! Stored settings are partial. Any key that is missing, has the wrong type
//! or is out of range takes its default, so a damaged settings file never
//! stops a map from being generated.

pub mod store;
pub mod types;

pub use store::{SettingsError, SettingsStore};
pub use types::{
    Locale, MapSettings, PartialSettings, SortBy, is_vault_relative, merge_with_defaults,
};

/// Directory inside the vault holding vaultmap's own state.
pub const STATE_DIR: &str = ".vaultmap";

/// Settings location relative to the vault root.
pub const DEFAULT_SETTINGS_FILE: &str = ".vaultmap/settings.toml";
