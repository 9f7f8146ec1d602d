//! Watch command implementation.

use std::time::Instant;

use vaultmap_core::settings::SettingsStore;
use vaultmap_core::watch::VaultWatcher;

use super::load_config;
use super::output::print_outcome;
use crate::ConfigSource;

pub fn run(source: &ConfigSource) {
    let rc = load_config(source);
    let store = SettingsStore::new(&rc.settings_file);
    let watcher = VaultWatcher::new(&rc.vault_root, store, Instant::now());

    // Bring the map up to date before waiting for changes
    match watcher.regenerate() {
        Ok(outcome) => print_outcome(&outcome, false),
        Err(e) => {
            eprintln!("Failed to update map: {}", e);
            std::process::exit(1);
        }
    }

    if !watcher.settings().auto_update {
        println!("Auto-update is off; changes to the vault are not tracked until it is enabled.");
    }

    if let Err(e) = watcher.run() {
        eprintln!("Watch stopped: {}", e);
        std::process::exit(1);
    }
}
