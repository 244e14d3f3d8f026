//! Catalogue access.
//!
//! [`CatalogueSource`] is the seam between the cache and the network. The
//! production implementation is [`HttpCatalogue`], which talks to PokeAPI.

mod http;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::models::{CreatureRecord, LookupKey, SpeciesInfo};

pub use http::{HttpCatalogue, DEFAULT_BASE_URL};

/// A read-only source of creature data.
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Fetches a single creature by id or name.
    async fn creature(&self, key: &LookupKey) -> Result<CreatureRecord>;

    /// Fetches species details from a species resource URL.
    async fn species(&self, url: &str) -> Result<SpeciesInfo>;

    /// Fetches raw image bytes.
    async fn image(&self, url: &str) -> Result<Bytes>;
}
