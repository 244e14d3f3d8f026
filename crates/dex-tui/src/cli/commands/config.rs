//! Configuration command handlers.

use anyhow::{bail, Result};
use dex_core::DEFAULT_BASE_URL;
use std::fs;

use crate::cli::args::ConfigCommands;
use crate::cli::output::{print_key_value, print_success};
use crate::shared::config::{config_path, load_config, CliConfig};

/// Handle config subcommands.
pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Profiles => list_profiles(),
        ConfigCommands::Init { force } => init_config(force),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config() -> Result<()> {
    match load_config()? {
        Some(cfg) => {
            println!("Current configuration:");
            println!();
            print_key_value("Profile", &cfg.default_profile);

            if let Some(profile) = cfg.profiles.get(&cfg.default_profile) {
                print_key_value("Base URL", &profile.base_url);
                print_key_value(
                    "User agent",
                    profile.user_agent.as_deref().unwrap_or("reqwest default"),
                );
            }
        }
        None => {
            println!("No config file found.");
            println!("Using defaults: base_url={}", DEFAULT_BASE_URL);
            println!();
            println!("Run 'pokedex config init' to create a config file.");
        }
    }

    Ok(())
}

fn list_profiles() -> Result<()> {
    match load_config()? {
        Some(cfg) => {
            println!("Available profiles:");
            println!();

            let mut names: Vec<_> = cfg.profiles.keys().collect();
            names.sort();
            for name in names {
                let profile = &cfg.profiles[name];
                let marker = if *name == cfg.default_profile {
                    " (default)"
                } else {
                    ""
                };
                println!("  {}{}", name, marker);
                println!("    Base URL: {}", profile.base_url);
                println!();
            }
        }
        None => {
            println!("No config file found.");
            println!("Run 'pokedex config init' to create a config file.");
        }
    }

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = config_path()?;

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let content = huml_rs::serde::to_string(&CliConfig::default())?;
    fs::write(&path, content)?;

    print_success(&format!("Created config file at {}", path.display()));
    println!();
    println!("Edit this file to point profiles at a PokeAPI mirror or set a user agent.");

    Ok(())
}

fn show_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}
