use vaultmap_core::config::default_config_path;
use vaultmap_core::map::{filter_files, lookup_map};
use vaultmap_core::vault::VaultSnapshot;

use super::{load_settings, resolve_config};
use crate::ConfigSource;

pub fn run(source: &ConfigSource) {
    let rc = match resolve_config(source) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL vaultmap doctor");
            println!("{e}");
            if source.config.is_none() && source.vault.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc);

    println!("OK   vaultmap doctor");
    match (&source.vault, &source.config) {
        (Some(_), _) => println!("path: (none, --vault)"),
        (None, Some(p)) => println!("path: {}", p.display()),
        (None, None) => println!("path: {}", default_config_path().display()),
    }
    println!("profile: {}", rc.active_profile);
    println!("vault_root: {}", rc.vault_root.display());
    println!("settings_file: {}", rc.settings_file.display());

    let (_, settings) = load_settings(&rc);
    println!("map: {}", settings.map_document_name());
    println!("map exists: {}", lookup_map(&rc.vault_root, &settings).is_some());
    println!(
        "auto_update: {} (every {} min)",
        settings.auto_update, settings.update_interval
    );

    match VaultSnapshot::scan(&rc.vault_root) {
        Ok(snapshot) => {
            println!("files: {}", snapshot.files.len());
            println!("folders: {}", snapshot.folders.len());
            println!("listed: {}", filter_files(&snapshot.files, &settings).len());
        }
        Err(e) => {
            println!("FAIL {}", e);
            std::process::exit(1);
        }
    }
}
