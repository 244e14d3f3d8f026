//! Pokédex TUI/CLI client.
//!
//! Provides both interactive TUI mode and non-interactive CLI commands.
//!
//! - No arguments: launches interactive TUI
//! - With subcommand: runs CLI command and exits

use anyhow::Result;
use clap::Parser;

mod cli;
mod shared;
mod tui;

use cli::args::{Cli, Commands};
use shared::config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (doesn't override existing env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Config commands don't touch the catalogue, handle separately
    if let Some(Commands::Config(cmd)) = &cli.command {
        return cli::commands::config::handle_config_command(cmd.clone());
    }

    shared::logging::init(cli.log_file.as_deref(), cli.command.is_none())?;

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config file: {}", e);
        None
    });

    let resolved =
        config::resolve_config(cli.profile.as_deref(), cli.base_url.as_deref(), file_config)?;
    tracing::debug!("Using catalogue at {}", resolved.base_url);

    let catalogue = shared::catalogue(&resolved)?;

    match cli.command {
        Some(cmd) => cli::run_command(catalogue, cmd).await,
        None => tui::run(catalogue).await,
    }
}
