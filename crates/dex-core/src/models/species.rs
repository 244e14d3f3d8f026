//! Species details resolved from a creature's species URL.

use serde::{Deserialize, Serialize};

use super::creature::NamedResource;

/// Language the client shows descriptions in.
pub const DISPLAY_LANGUAGE: &str = "en";

pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN_GENUS: &str = "Unknown";

/// Descriptive text and genus for a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    /// First English flavor text, flattened onto one line.
    pub description: String,
    /// English genus, e.g. "Seed Pokémon".
    pub genus: String,
}

impl Default for SpeciesInfo {
    fn default() -> Self {
        Self {
            description: NO_DESCRIPTION.to_string(),
            genus: UNKNOWN_GENUS.to_string(),
        }
    }
}

/// `GET /pokemon-species/{id}` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SpeciesResponse {
    #[serde(default)]
    flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    genera: Vec<GenusEntry>,
}

#[derive(Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct GenusEntry {
    genus: String,
    language: NamedResource,
}

/// Flavor text carries the game's hard line breaks and form feeds.
fn flatten_flavor_text(text: &str) -> String {
    text.split(['\n', '\u{c}', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<SpeciesResponse> for SpeciesInfo {
    fn from(response: SpeciesResponse) -> Self {
        let description = response
            .flavor_text_entries
            .iter()
            .find(|e| e.language.name == DISPLAY_LANGUAGE)
            .map(|e| flatten_flavor_text(&e.flavor_text))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let genus = response
            .genera
            .into_iter()
            .find(|g| g.language.name == DISPLAY_LANGUAGE)
            .map(|g| g.genus)
            .unwrap_or_else(|| UNKNOWN_GENUS.to_string());

        Self { description, genus }
    }
}
