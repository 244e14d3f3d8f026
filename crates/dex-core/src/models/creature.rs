//! Creature record model.

use serde::{Deserialize, Serialize};

use super::key::LookupKey;

/// Which of the two sprite images to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteVariant {
    #[default]
    Default,
    Shiny,
}

impl SpriteVariant {
    /// Maps the shiny toggle onto a variant.
    pub fn from_shiny(shiny: bool) -> Self {
        if shiny { Self::Shiny } else { Self::Default }
    }

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteVariant::Default => "default",
            SpriteVariant::Shiny => "shiny",
        }
    }
}

impl std::fmt::Display for SpriteVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Front sprite URLs. Either may be missing for some forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

impl Sprites {
    /// Returns the URL for the given variant, if the catalogue has one.
    pub fn url(&self, variant: SpriteVariant) -> Option<&str> {
        match variant {
            SpriteVariant::Default => self.front_default.as_deref(),
            SpriteVariant::Shiny => self.front_shiny.as_deref(),
        }
    }
}

/// A Pokémon as returned by the catalogue, reduced to the fields the client shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: u32,
    /// Lowercase catalogue name (e.g. "bulbasaur").
    pub name: String,
    /// Type names ordered by slot. One or two entries.
    pub types: Vec<String>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub sprites: Sprites,
    /// Ability names in catalogue order.
    pub abilities: Vec<String>,
    /// URL of the species resource holding flavor text and genus.
    pub species_url: String,
}

impl CreatureRecord {
    /// Name as shown in the title line.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Returns the type at the given slot, 0-based.
    pub fn type_at(&self, index: usize) -> Option<&str> {
        self.types.get(index).map(String::as_str)
    }

    /// Returns the sprite URL for the given variant.
    pub fn sprite_url(&self, variant: SpriteVariant) -> Option<&str> {
        self.sprites.url(variant)
    }

    /// Keys under which this record can be found in the cache.
    pub fn keys(&self) -> [LookupKey; 2] {
        [LookupKey::Id(self.id), LookupKey::Name(self.name.clone())]
    }

    /// Height formatted in metres.
    pub fn height_display(&self) -> String {
        format!("{}.{} m", self.height / 10, self.height % 10)
    }

    /// Weight formatted in kilograms.
    pub fn weight_display(&self) -> String {
        format!("{}.{} kg", self.weight / 10, self.weight % 10)
    }
}

/// Formats an ability name for display: "solar-power" becomes "Solar power".
pub fn ability_display_name(ability: &str) -> String {
    let spaced = ability.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `GET /pokemon/{key}` response. Only the fields the client reads.
#[derive(Debug, Deserialize)]
pub(crate) struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    sprites: Sprites,
    species: NamedResource,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(default)]
    slot: u8,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl From<PokemonResponse> for CreatureRecord {
    fn from(mut response: PokemonResponse) -> Self {
        response.types.sort_by_key(|t| t.slot);

        Self {
            id: response.id,
            name: response.name,
            types: response.types.into_iter().map(|t| t.kind.name).collect(),
            height: response.height,
            weight: response.weight,
            sprites: response.sprites,
            abilities: response
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            species_url: response.species.url,
        }
    }
}
