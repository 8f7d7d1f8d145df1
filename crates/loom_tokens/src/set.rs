//! Token sets - tenant-scoped name → value mappings

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokens::{
    is_valid_entry, normalize_name, ColorToken, ColorTokens, RadiusToken, RadiusTokens, SpacingToken,
    SpacingTokens,
};

/// Ordered mapping from token name to a primitive CSS value
///
/// Serializes as a flat map, so a tenant's tokens can live in JSON or TOML:
///
/// ```toml
/// color-primary = "#111"
/// spacing-4 = "18px"
/// ```
///
/// Names are stored without a leading `--`, whichever way they arrive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct TokenSet {
    values: IndexMap<String, String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every default scale flattened into one set
    pub fn defaults() -> Self {
        let colors = ColorTokens::default();
        let spacing = SpacingTokens::default();
        let radii = RadiusTokens::default();

        let mut set = Self::new();
        for token in ColorToken::ALL {
            set.insert(token.name(), colors.get(token));
        }
        for token in SpacingToken::ALL {
            set.insert(token.name(), spacing.get(token));
        }
        for token in RadiusToken::ALL {
            set.insert(token.name(), radii.get(token));
        }
        set
    }

    /// Insert or replace a token value, returning the previous one
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.values
            .insert(normalize_name(name.as_ref()).to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(normalize_name(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of entries that cannot be written into a token scope
    pub fn invalid_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(name, value)| !is_valid_entry(name, value))
            .map(|(name, _)| name)
            .collect()
    }

    /// Layer `other` on top of this set; values in `other` win
    pub fn extend(&mut self, other: &TokenSet) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }
}

impl From<IndexMap<String, String>> for TokenSet {
    fn from(values: IndexMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<TokenSet> for IndexMap<String, String> {
    fn from(set: TokenSet) -> Self {
        set.values
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
