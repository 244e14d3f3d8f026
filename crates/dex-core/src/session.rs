//! Browsing session: cache, navigation and display state driven together.
//!
//! Every operation runs its network calls to completion before returning.
//! Species failures are logged and leave the primary record on screen.

use std::sync::Arc;

use crate::cache::CatalogueCache;
use crate::catalogue::CatalogueSource;
use crate::error::{DexError, Result};
use crate::models::{CreatureRecord, LookupKey};
use crate::navigation::{FIRST_INDEX, Navigator};
use crate::viewer::ViewState;

/// One user's browsing session.
pub struct Session<S> {
    cache: CatalogueCache<S>,
    navigator: Navigator,
    view: ViewState,
}

impl<S: CatalogueSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: CatalogueCache::new(source),
            navigator: Navigator::new(),
            view: ViewState::Loading,
        }
    }

    pub fn cache(&self) -> &CatalogueCache<S> {
        &self.cache
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Dex number previous/next step from.
    pub fn index(&self) -> u32 {
        self.navigator.current()
    }

    /// Loads the first entry. On failure the view moves to `StartupFailed`.
    pub async fn start(&mut self) -> Result<Arc<CreatureRecord>> {
        tracing::info!("Fetching initial Pokémon data");
        let result = self.open(LookupKey::Id(FIRST_INDEX)).await;
        if let Err(e) = &result {
            tracing::warn!("Failed to fetch initial Pokémon data: {}", e);
            self.view = ViewState::StartupFailed;
        }
        result
    }

    /// Looks up a key and shows the result.
    pub async fn open(&mut self, key: LookupKey) -> Result<Arc<CreatureRecord>> {
        match self.cache.fetch(&key).await {
            Ok(record) => {
                self.navigator.jump_to(record.id);
                self.view.show(Arc::clone(&record));
                self.load_species(&record).await;
                Ok(record)
            }
            Err(e) => {
                self.view.not_found(key.to_string());
                Err(e)
            }
        }
    }

    /// Looks up free-form search input (a name or a dex number).
    pub async fn search(&mut self, input: &str) -> Result<Arc<CreatureRecord>> {
        match input.parse::<LookupKey>() {
            Ok(key) => self.open(key).await,
            Err(_) => {
                self.view.not_found(input.trim());
                Err(DexError::NotFound(input.trim().to_string()))
            }
        }
    }

    /// Shows the previous entry. Returns `None` without any request at the first entry.
    pub async fn previous(&mut self) -> Option<Result<Arc<CreatureRecord>>> {
        let index = self.navigator.previous()?;
        Some(self.open(LookupKey::Id(index)).await)
    }

    /// Shows the next entry.
    pub async fn next(&mut self) -> Result<Arc<CreatureRecord>> {
        let index = self.navigator.next();
        self.open(LookupKey::Id(index)).await
    }

    /// Flips the shiny toggle on the current entry.
    pub fn toggle_shiny(&mut self) -> bool {
        self.view.toggle_shiny()
    }

    async fn load_species(&mut self, record: &CreatureRecord) {
        match self.cache.species(record).await {
            Ok(species) => self.view.set_species(record.id, species),
            Err(e) => tracing::warn!("Error fetching species data for {}: {}", record.name, e),
        }
    }
}
