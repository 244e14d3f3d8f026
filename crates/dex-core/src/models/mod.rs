//! Domain models for the Pokédex client.

pub mod creature;
pub mod key;
pub mod species;

pub use creature::*;
pub use key::*;
pub use species::*;
