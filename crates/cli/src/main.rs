mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vaultmap", version, about = "Generate a markdown map of a note vault")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Use this vault directly instead of a configured profile
    #[arg(long, global = true)]
    vault: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Regenerate the map, creating it when it does not exist
    Update(UpdateArgs),

    /// Create the map, replacing any existing document
    Create(CreateArgs),

    /// Keep the map up to date as the vault changes
    Watch,

    /// Show or edit map settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Validate configuration and print resolved paths
    Doctor,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Print the generated document instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Print the outcome as JSON
    #[arg(long, conflicts_with = "stdout")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the effective settings
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Change one setting
    Set {
        /// Setting name, e.g. sort_by
        key: String,
        /// New value; folder lists are comma separated
        value: String,
    },

    /// Restore the default settings
    Reset,
}

/// Where configuration comes from, shared by every command.
#[derive(Debug)]
pub struct ConfigSource {
    pub config: Option<PathBuf>,
    pub profile: Option<String>,
    pub vault: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let source = ConfigSource { config: cli.config, profile: cli.profile, vault: cli.vault };

    match cli.command {
        Commands::Update(args) => cmd::update::run(&source, &args),
        Commands::Create(args) => cmd::create::run(&source, &args),
        Commands::Watch => cmd::watch::run(&source),
        Commands::Settings(command) => cmd::settings::run(&source, command),
        Commands::Doctor => cmd::doctor::run(&source),
    }
}
