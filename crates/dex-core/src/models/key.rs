//! Lookup keys accepted by the catalogue.

use std::str::FromStr;

use crate::error::DexError;

/// Identifier used to look a Pokémon up: its national dex number or its name.
///
/// Names are stored trimmed and lowercased, the way the catalogue spells them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    Id(u32),
    Name(String),
}

impl LookupKey {
    /// Creates a numeric key. Dex numbers start at 1.
    pub fn id(id: u32) -> Result<Self, DexError> {
        if id == 0 {
            return Err(DexError::InvalidKey(id.to_string()));
        }
        Ok(Self::Id(id))
    }

    /// Returns the path segment used in the catalogue URL.
    pub fn path_segment(&self) -> String {
        match self {
            LookupKey::Id(id) => id.to_string(),
            LookupKey::Name(name) => urlencoding::encode(name).into_owned(),
        }
    }
}

impl FromStr for LookupKey {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DexError::InvalidKey(s.to_string()));
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<u32>() {
                Ok(id) => Self::id(id),
                Err(_) => Err(DexError::InvalidKey(s.to_string())),
            };
        }

        Ok(Self::Name(trimmed.to_lowercase()))
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "#{}", id),
            LookupKey::Name(name) => write!(f, "{}", name),
        }
    }
}
