//! Read-through creature cache.
//!
//! Records are kept for the lifetime of the cache and never invalidated. A
//! successful lookup is stored under the queried key and under the record's
//! own id and name, so `fetch("pikachu")` followed by `fetch(25)` costs a
//! single request. All aliases share one [`Arc`].

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::catalogue::CatalogueSource;
use crate::error::{DexError, Result};
use crate::models::{CreatureRecord, LookupKey, SpeciesInfo, SpriteVariant};

/// Creature cache in front of a [`CatalogueSource`].
pub struct CatalogueCache<S> {
    source: S,
    entries: HashMap<LookupKey, Arc<CreatureRecord>>,
}

impl<S: CatalogueSource> CatalogueCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    /// Returns the underlying catalogue.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Looks a creature up, hitting the network only on a cache miss.
    ///
    /// Every failure (transport, status, decode) is reported as
    /// [`DexError::NotFound`] and leaves the cache untouched. There is no retry.
    pub async fn fetch(&mut self, key: &LookupKey) -> Result<Arc<CreatureRecord>> {
        if let Some(record) = self.entries.get(key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(Arc::clone(record));
        }

        let record = match self.source.creature(key).await {
            Ok(record) => Arc::new(record),
            Err(e) => {
                tracing::debug!("Lookup of {} failed: {}", key, e);
                return Err(DexError::NotFound(key.to_string()));
            }
        };

        tracing::debug!("Cached #{} {} (queried as {})", record.id, record.name, key);
        for alias in record.keys() {
            self.entries
                .entry(alias)
                .or_insert_with(|| Arc::clone(&record));
        }
        self.entries
            .entry(key.clone())
            .or_insert_with(|| Arc::clone(&record));

        Ok(record)
    }

    /// Resolves species details for a record. Not cached.
    pub async fn species(&self, record: &CreatureRecord) -> Result<SpeciesInfo> {
        self.source.species(&record.species_url).await
    }

    /// Downloads the sprite image for a record. Not cached.
    pub async fn sprite(&self, record: &CreatureRecord, variant: SpriteVariant) -> Result<Bytes> {
        let url = record
            .sprite_url(variant)
            .ok_or_else(|| DexError::MissingSprite {
                name: record.name.clone(),
                variant: variant.as_str(),
            })?;
        self.source.image(url).await
    }

    /// Returns a cached record without fetching.
    pub fn peek(&self, key: &LookupKey) -> Option<&Arc<CreatureRecord>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &LookupKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached keys. Aliases of one record count separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
