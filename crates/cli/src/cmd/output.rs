//! Shared output formatting for map commands.

use serde::Serialize;
use vaultmap_core::map::MapOutcome;

/// Map outcome for JSON output.
#[derive(Debug, Serialize)]
pub struct OutcomeOutput {
    pub path: String,
    pub action: String,
    pub files_listed: usize,
}

impl From<&MapOutcome> for OutcomeOutput {
    fn from(outcome: &MapOutcome) -> Self {
        Self {
            path: outcome.path.to_string_lossy().to_string(),
            action: outcome.action.as_str().to_string(),
            files_listed: outcome.files_listed,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn print_outcome(outcome: &MapOutcome, json: bool) {
    if json {
        print_json(&OutcomeOutput::from(outcome));
    } else {
        println!(
            "Map {} at {} ({} files)",
            outcome.action.as_str(),
            outcome.path.display(),
            outcome.files_listed
        );
    }
}
