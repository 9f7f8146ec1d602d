//! Update command implementation.

use chrono::Local;
use vaultmap_core::map::{generate_map_content, update_map};
use vaultmap_core::vault::VaultSnapshot;

use super::output::print_outcome;
use super::{load_config, load_settings};
use crate::{ConfigSource, UpdateArgs};

pub fn run(source: &ConfigSource, args: &UpdateArgs) {
    let rc = load_config(source);
    let (_, settings) = load_settings(&rc);

    if args.stdout {
        let snapshot = match VaultSnapshot::scan(&rc.vault_root) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to update map: {}", e);
                std::process::exit(1);
            }
        };
        print!("{}", generate_map_content(&snapshot.files, &settings, &Local::now()));
        return;
    }

    match update_map(&rc.vault_root, &settings, &Local::now()) {
        Ok(outcome) => print_outcome(&outcome, args.json),
        Err(e) => {
            eprintln!("Failed to update map: {}", e);
            std::process::exit(1);
        }
    }
}
