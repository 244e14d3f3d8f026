//! Client configuration loading and resolution.
//!
//! Supports profile-based configuration from `~/.pokedex/config.huml` with
//! priority order: CLI flags > environment variables > config file > defaults.

use anyhow::{bail, Context, Result};
use dex_core::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "POKEDEX_CONFIG";

/// Overrides the catalogue base URL from the profile.
pub const BASE_URL_ENV: &str = "POKEDEX_BASE_URL";

/// Configuration loaded from config.huml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Name of the default profile to use.
    pub default_profile: String,
    /// Map of profile name to profile configuration.
    pub profiles: HashMap<String, Profile>,
}

/// A named catalogue endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Creature endpoint, e.g. "https://pokeapi.co/api/v2/pokemon".
    pub base_url: String,
    /// Custom `User-Agent` header sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Resolved configuration after applying priority rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub user_agent: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                base_url: DEFAULT_BASE_URL.to_string(),
                user_agent: None,
            },
        );
        Self {
            default_profile: "default".to_string(),
            profiles,
        }
    }
}

/// Returns the config directory path (~/.pokedex).
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".pokedex"))
        .context("Could not determine home directory")
}

/// Returns the config file path, honouring `POKEDEX_CONFIG`.
pub fn config_path() -> Result<PathBuf> {
    match std::env::var(CONFIG_ENV) {
        Ok(p) => Ok(PathBuf::from(p)),
        Err(_) => Ok(config_dir()?.join("config.huml")),
    }
}

/// Load configuration from the config file.
///
/// Returns `Ok(None)` if the config file doesn't exist.
/// Returns an error if the file exists but is invalid.
pub fn load_config() -> Result<Option<CliConfig>> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let content =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let config: CliConfig = huml_rs::serde::from_str(&content)
        .with_context(|| format!("Invalid HUML in {}", path.display()))?;

    validate_config(&config)?;

    Ok(Some(config))
}

/// Validate that the default profile exists and every profile has a base URL.
fn validate_config(config: &CliConfig) -> Result<()> {
    if config.profiles.is_empty() {
        bail!("Config file must contain at least one profile");
    }

    if !config.profiles.contains_key(&config.default_profile) {
        bail!(
            "Default profile '{}' not found in profiles",
            config.default_profile
        );
    }

    for (name, profile) in &config.profiles {
        if profile.base_url.trim().is_empty() {
            bail!("Profile '{}' has an empty base_url", name);
        }
    }

    Ok(())
}

/// Resolve configuration by applying priority rules.
///
/// Priority order (highest to lowest):
/// 1. CLI flag (`--base-url`)
/// 2. Environment variable (`POKEDEX_BASE_URL`)
/// 3. Config file profile
/// 4. Public PokeAPI endpoint
pub fn resolve_config(
    profile_flag: Option<&str>,
    base_url_flag: Option<&str>,
    file_config: Option<CliConfig>,
) -> Result<ResolvedConfig> {
    let mut base_url = DEFAULT_BASE_URL.to_string();
    let mut user_agent = None;

    if let Some(config) = file_config {
        let profile_name = profile_flag.unwrap_or(&config.default_profile);
        if let Some(profile) = config.profiles.get(profile_name) {
            base_url = profile.base_url.clone();
            user_agent = profile.user_agent.clone();
        } else if profile_flag.is_some() {
            bail!(
                "Profile '{}' not found. Run 'pokedex config profiles' to see available profiles.",
                profile_name
            );
        }
    } else if let Some(requested_profile) = profile_flag
        && requested_profile != "default"
    {
        bail!(
            "Profile '{}' not found. No config file exists. Run 'pokedex config init' to create one.",
            requested_profile
        );
    }

    if let Ok(env_url) = std::env::var(BASE_URL_ENV)
        && !env_url.trim().is_empty()
    {
        base_url = env_url;
    }

    if let Some(url) = base_url_flag {
        base_url = url.to_string();
    }

    Ok(ResolvedConfig {
        base_url,
        user_agent,
    })
}
