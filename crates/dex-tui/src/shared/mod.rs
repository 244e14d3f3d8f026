//! Code shared by the CLI and TUI modes.

pub mod config;
pub mod logging;

use anyhow::{Context, Result};
use dex_core::HttpCatalogue;

use config::ResolvedConfig;

/// Builds the catalogue client for the resolved configuration.
pub fn catalogue(resolved: &ResolvedConfig) -> Result<HttpCatalogue> {
    let catalogue = match &resolved.user_agent {
        Some(agent) => HttpCatalogue::with_user_agent(&resolved.base_url, agent),
        None => HttpCatalogue::new(&resolved.base_url),
    };
    catalogue.with_context(|| format!("Invalid catalogue base URL: {}", resolved.base_url))
}
