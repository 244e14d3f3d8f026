//! Error types for the Pokédex core library.

use thiserror::Error;

/// Core error type for catalogue lookups.
#[derive(Error, Debug)]
pub enum DexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Catalogue returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid lookup key: {0:?}")]
    InvalidKey(String),

    #[error("Pokémon not found: {0}")]
    NotFound(String),

    #[error("No {variant} sprite for {name}")]
    MissingSprite {
        name: String,
        variant: &'static str,
    },
}

impl DexError {
    /// Returns true if this error means the lookup key did not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DexError::NotFound(_))
    }
}

/// Result type alias for catalogue operations.
pub type Result<T> = std::result::Result<T, DexError>;
