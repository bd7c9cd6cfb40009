//! Type-safe identifier wrapper for location names.
//!
//! Locations are keyed by their real-world name (a unique string from the
//! source dataset) rather than a synthetic identifier. The newtype keeps
//! the key from being confused with other strings at compile time and
//! gives the graph a single canonical ordering (lexicographic), which is
//! what makes tie-breaks and iteration order deterministic.

use serde::{Deserialize, Serialize};

/// Unique identifier for a location (vertex in the city graph).
///
/// Wraps the location's name as it appears in the source dataset.
/// Ordering is lexicographic, which the graph relies on for deterministic
/// iteration and documented tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Create an identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the underlying [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for LocationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let a = LocationId::from("Astoria Park");
        let b = LocationId::from("Citi Field");
        assert!(a < b);
    }

    #[test]
    fn display_matches_name() {
        let id = LocationId::from("Owls Head Park");
        assert_eq!(id.to_string(), "Owls Head Park");
        assert_eq!(id.as_str(), "Owls Head Park");
    }

    #[test]
    fn serde_is_transparent() {
        let id = LocationId::from("Citi Field");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Citi Field\"");
        let back: LocationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
