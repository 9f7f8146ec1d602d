//! Create command implementation.

use chrono::Local;
use vaultmap_core::map::create_map;

use super::output::{OutcomeOutput, print_json};
use super::{load_config, load_settings};
use crate::{ConfigSource, CreateArgs};

pub fn run(source: &ConfigSource, args: &CreateArgs) {
    let rc = load_config(source);
    let (_, settings) = load_settings(&rc);

    let outcome = match create_map(&rc.vault_root, &settings, &Local::now()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Failed to create map: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        print_json(&OutcomeOutput::from(&outcome));
    } else {
        println!("Vault map \"{}\" created!", settings.map_file_name);
    }
}
