//! HTTP client for the PokeAPI catalogue.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use super::CatalogueSource;
use crate::error::{DexError, Result};
use crate::models::{CreatureRecord, LookupKey, SpeciesInfo};
use crate::models::creature::PokemonResponse;
use crate::models::species::SpeciesResponse;

/// Public PokeAPI endpoint for creature lookups.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// HTTP client for the catalogue service.
#[derive(Debug, Clone)]
pub struct HttpCatalogue {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpCatalogue {
    /// Creates a client for the given base URL (e.g. `https://pokeapi.co/api/v2/pokemon`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that sends the given `User-Agent` header.
    pub fn with_user_agent(base_url: &str, user_agent: &str) -> Result<Self> {
        let inner = reqwest::Client::builder().user_agent(user_agent).build()?;
        Self::with_client(inner, base_url)
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(inner: reqwest::Client, base_url: &str) -> Result<Self> {
        // Malformed base URLs are rejected here, not on first lookup.
        Url::parse(base_url)?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full URL for a creature lookup.
    fn url(&self, key: &LookupKey) -> String {
        format!("{}/{}", self.base_url, key.path_segment())
    }

    /// Performs a GET request and returns the successful response.
    async fn send(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!("GET {}", url);
        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DexError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Performs a GET request and deserializes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.send(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogueSource for HttpCatalogue {
    async fn creature(&self, key: &LookupKey) -> Result<CreatureRecord> {
        let response: PokemonResponse = self.get_json(&self.url(key)).await?;
        Ok(response.into())
    }

    async fn species(&self, url: &str) -> Result<SpeciesInfo> {
        let response: SpeciesResponse = self.get_json(url).await?;
        Ok(response.into())
    }

    async fn image(&self, url: &str) -> Result<Bytes> {
        let response = self.send(url).await?;
        Ok(response.bytes().await?)
    }
}
