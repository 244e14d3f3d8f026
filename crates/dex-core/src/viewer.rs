//! What the client is currently showing.

use std::sync::Arc;

use crate::models::{CreatureRecord, SpeciesInfo, SpriteVariant};

pub const NOT_FOUND_TITLE: &str = "POKÉMON NOT FOUND";
pub const LOADING_MESSAGE: &str = "Loading Pokémon data...";
pub const STARTUP_FAILED_MESSAGE: &str = "Failed to load Pokémon data. Please try again.";

/// A creature on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub record: Arc<CreatureRecord>,
    pub shiny: bool,
    /// Filled in once the species lookup succeeds.
    pub species: Option<SpeciesInfo>,
}

impl Entry {
    pub fn variant(&self) -> SpriteVariant {
        SpriteVariant::from_shiny(self.shiny)
    }

    /// Image URL for the current shiny setting.
    pub fn sprite_url(&self) -> Option<&str> {
        self.record.sprite_url(self.variant())
    }
}

/// Display state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Waiting for the first record.
    #[default]
    Loading,
    /// The first record could not be loaded.
    StartupFailed,
    Loaded(Entry),
    /// The last lookup did not resolve. Detail fields are blank.
    NotFound { query: String },
}

impl ViewState {
    /// Shows a record with the shiny toggle reset and species pending.
    pub fn show(&mut self, record: Arc<CreatureRecord>) {
        *self = ViewState::Loaded(Entry {
            record,
            shiny: false,
            species: None,
        });
    }

    pub fn not_found(&mut self, query: impl Into<String>) {
        *self = ViewState::NotFound {
            query: query.into(),
        };
    }

    /// Attaches species details if the given record is still on screen.
    pub fn set_species(&mut self, record_id: u32, species: SpeciesInfo) {
        if let ViewState::Loaded(entry) = self
            && entry.record.id == record_id
        {
            entry.species = Some(species);
        }
    }

    /// Flips the shiny toggle. Returns false when nothing is on screen.
    pub fn toggle_shiny(&mut self) -> bool {
        match self {
            ViewState::Loaded(entry) => {
                entry.shiny = !entry.shiny;
                true
            }
            _ => false,
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            ViewState::Loaded(entry) => Some(entry),
            _ => None,
        }
    }

    /// Title line text.
    pub fn title(&self) -> String {
        match self {
            ViewState::Loading => LOADING_MESSAGE.to_string(),
            ViewState::StartupFailed => STARTUP_FAILED_MESSAGE.to_string(),
            ViewState::NotFound { .. } => NOT_FOUND_TITLE.to_string(),
            ViewState::Loaded(entry) => {
                let prefix = if entry.shiny { "SHINY " } else { "" };
                format!("{}{}", prefix, entry.record.display_name())
            }
        }
    }
}
