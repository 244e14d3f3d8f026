//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Terminal Pokédex.
///
/// Run without arguments to launch the interactive TUI.
/// Run with a subcommand for non-interactive CLI mode.
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse PokeAPI from the terminal", long_about = None)]
pub struct Cli {
    /// Configuration profile to use
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Catalogue base URL (overrides profile and POKEDEX_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Append logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Show a Pokémon's details and description
    Show {
        /// Dex number or name
        key: String,

        /// Show the shiny sprite URL
        #[arg(long)]
        shiny: bool,
    },

    /// Show a Pokémon's species description and genus
    Species {
        /// Dex number or name
        key: String,
    },

    /// Download a Pokémon's sprite image
    Sprite {
        /// Dex number or name
        key: String,

        /// Download the shiny variant
        #[arg(long)]
        shiny: bool,

        /// Output file (defaults to <name>.png in the current directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// List available profiles
    Profiles,
    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Show config file path
    Path,
}
