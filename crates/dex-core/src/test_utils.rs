//! In-memory catalogue for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use crate::catalogue::CatalogueSource;
use crate::error::{DexError, Result};
use crate::models::{CreatureRecord, LookupKey, SpeciesInfo, Sprites};

/// Builds a record with predictable URLs.
pub fn record(id: u32, name: &str, types: &[&str]) -> CreatureRecord {
    CreatureRecord {
        id,
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        height: 7,
        weight: 69,
        sprites: Sprites {
            front_default: Some(format!("https://img.test/{}.png", id)),
            front_shiny: Some(format!("https://img.test/shiny/{}.png", id)),
        },
        abilities: vec!["overgrow".to_string()],
        species_url: format!("https://species.test/{}/", id),
    }
}

/// Catalogue backed by a fixed list of records that counts every call.
#[derive(Default)]
pub struct FakeCatalogue {
    records: Vec<CreatureRecord>,
    species: HashMap<String, SpeciesInfo>,
    requests: Mutex<Vec<LookupKey>>,
    species_calls: AtomicUsize,
}

impl FakeCatalogue {
    pub fn new(records: Vec<CreatureRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Registers species details for a record.
    pub fn with_species(mut self, record: &CreatureRecord, info: SpeciesInfo) -> Self {
        self.species.insert(record.species_url.clone(), info);
        self
    }

    /// Every key passed to `creature`, in order.
    pub fn requests(&self) -> Vec<LookupKey> {
        self.requests.lock().unwrap().clone()
    }

    pub fn creature_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn species_calls(&self) -> usize {
        self.species_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogueSource for FakeCatalogue {
    async fn creature(&self, key: &LookupKey) -> Result<CreatureRecord> {
        self.requests.lock().unwrap().push(key.clone());
        self.records
            .iter()
            .find(|r| match key {
                LookupKey::Id(id) => r.id == *id,
                LookupKey::Name(name) => &r.name == name,
            })
            .cloned()
            .ok_or_else(|| DexError::NotFound(key.to_string()))
    }

    async fn species(&self, url: &str) -> Result<SpeciesInfo> {
        self.species_calls.fetch_add(1, Ordering::SeqCst);
        self.species
            .get(url)
            .cloned()
            .ok_or_else(|| DexError::NotFound(url.to_string()))
    }

    async fn image(&self, url: &str) -> Result<Bytes> {
        Ok(Bytes::from(url.as_bytes().to_vec()))
    }
}
