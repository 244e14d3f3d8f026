//! Non-interactive CLI mode.

pub mod args;
pub mod commands;
pub mod output;

use anyhow::Result;
use dex_core::HttpCatalogue;

use args::Commands;

/// Run a CLI command and exit.
pub async fn run_command(catalogue: HttpCatalogue, command: Commands) -> Result<()> {
    match command {
        Commands::Show { key, shiny } => commands::creature::show(catalogue, &key, shiny).await,
        Commands::Species { key } => commands::creature::species(catalogue, &key).await,
        Commands::Sprite { key, shiny, output } => {
            commands::creature::sprite(catalogue, &key, shiny, output).await
        }
        Commands::Config(_) => unreachable!("Config commands handled in main.rs"),
    }
}
