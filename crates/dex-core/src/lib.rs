//! Pokédex Core Library
//!
//! Catalogue client, read-through cache and browsing state for the Pokédex client.

pub mod cache;
pub mod catalogue;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cache::CatalogueCache;
pub use catalogue::{CatalogueSource, HttpCatalogue, DEFAULT_BASE_URL};
pub use error::{DexError, Result};
pub use session::Session;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
