//! Value-to-token mappings
//!
//! A [`TokenMapping`] is an insertion-ordered map from a literal value (for
//! example a hex color) to the design-system token that replaces it. Order
//! matters: substitution applies the entries one after another, so a later
//! entry can match text produced by an earlier one.

mod combine;
mod csv_loader;

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

pub use combine::combine;
pub use csv_loader::load_csv_mappings;

/// Insertion-ordered map from literal value to replacement token
///
/// Re-inserting an existing value replaces its token but keeps the position
/// of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TokenMapping {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the token for `value`, returning the previous token
    pub fn insert(&mut self, value: impl Into<String>, token: impl Into<String>) -> Option<String> {
        let value = value.into();
        let token = token.into();

        if let Some(&idx) = self.index.get(&value) {
            return Some(std::mem::replace(&mut self.entries[idx].1, token));
        }

        self.index.insert(value.clone(), self.entries.len());
        self.entries.push((value, token));
        None
    }

    /// Token for `value`, if present (exact, case-sensitive key lookup)
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&str> {
        self.index
            .get(value)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    /// Whether `value` is a key of this mapping
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(value, token)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, t)| (v.as_str(), t.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TokenMapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (value, token) in iter {
            self.insert(value, token);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<'de> Deserialize<'de> for TokenMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = TokenMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string values to string tokens")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mapping = TokenMapping::new();
                while let Some((value, token)) = access.next_entry::<String, String>()? {
                    mapping.insert(value, token);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
