//! Settings command implementation.

use super::output::print_json;
use super::{load_config, load_settings};
use crate::{ConfigSource, SettingsCommand};

pub fn run(source: &ConfigSource, command: SettingsCommand) {
    let rc = load_config(source);
    let (store, settings) = load_settings(&rc);

    match command {
        SettingsCommand::Show { json } => {
            if json {
                print_json(&settings);
            } else {
                println!("{}", settings);
            }
        }
        SettingsCommand::Set { key, value } => match store.set(&key, &value) {
            Ok(updated) => println!("{}", updated),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        SettingsCommand::Reset => match store.reset() {
            Ok(_) => println!("Settings reset to defaults in {}", store.path().display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
