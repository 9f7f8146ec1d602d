pub mod create;
pub mod doctor;
pub mod output;
pub mod settings;
pub mod update;
pub mod watch;

use vaultmap_core::config::{ConfigError, ConfigLoader, ResolvedConfig};
use vaultmap_core::settings::{MapSettings, SettingsStore};

use crate::ConfigSource;

/// Resolve configuration from `--vault` or the config file.
pub fn resolve_config(source: &ConfigSource) -> Result<ResolvedConfig, ConfigError> {
    match &source.vault {
        Some(vault) => ConfigLoader::for_vault(&vault.to_string_lossy()),
        None => ConfigLoader::load(source.config.as_deref(), source.profile.as_deref()),
    }
}

/// Load configuration and start logging, exiting on failure.
pub fn load_config(source: &ConfigSource) -> ResolvedConfig {
    let rc = match resolve_config(source) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc);
    tracing::debug!(profile = %rc.active_profile, "vault at {}", rc.vault_root.display());
    rc
}

pub fn load_settings(rc: &ResolvedConfig) -> (SettingsStore, MapSettings) {
    let store = SettingsStore::new(&rc.settings_file);
    let settings = store.load();
    (store, settings)
}
