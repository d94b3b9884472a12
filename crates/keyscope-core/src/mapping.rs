// SPDX-License-Identifier: MIT OR Apache-2.0
//! Key name remapping tables
//!
//! A [`RootMap`] renames legacy object keys to their current names. Lookups
//! are exact string matches: `CA` maps, `CAX` and `xCA` do not.
//!
//! A table never names the same source key twice. Building one from pairs or
//! from a JSON object rejects duplicates with
//! [`KeyscopeError::DuplicateMapping`].

use crate::error::{KeyscopeError, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Legacy prefixes and the names that replaced them.
const LEGACY_ROOTS: &[(&str, &str)] = &[
    ("AL", "EAL"),
    ("CA", "ECA"),
    ("CMP", "ECM"),
    ("EN", "EEN"),
    ("ET", "EET"),
    ("MC", "EMC"),
    ("PM", "EPM"),
    ("QM", "EQM"),
    ("CV", "ETC"),
    ("RI", "RIT"),
    ("ADM", "ADM"),
    ("DSG", "DSG"),
    ("CIC", "CIC"),
    ("SIN", "SIN"),
    ("ARQ", "ARQ"),
    ("ICD", "ICD"),
];

/// Mapping from old key names to new key names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RootMap {
    entries: BTreeMap<String, String>,
}

impl RootMap {
    /// Empty table; every key passes through unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The built-in table of legacy root names.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            entries: LEGACY_ROOTS
                .iter()
                .map(|&(from, to)| (from.to_owned(), to.to_owned()))
                .collect(),
        }
    }

    /// Build a table from `(old, new)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`KeyscopeError::DuplicateMapping`] if a source key repeats.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (from, to) in pairs {
            map.insert(from, to)?;
        }
        Ok(map)
    }

    /// Add one entry.
    ///
    /// # Errors
    ///
    /// Returns [`KeyscopeError::DuplicateMapping`] if `from` is already mapped.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<()> {
        let from = from.into();
        if self.entries.contains_key(&from) {
            return Err(KeyscopeError::DuplicateMapping { key: from });
        }
        self.entries.insert(from, to.into());
        Ok(())
    }

    /// Load a table from a JSON object file such as `{"CA": "ECA"}`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyscopeError::Read`] if the file cannot be read and
    /// [`KeyscopeError::Parse`] if it is not a JSON object of strings or
    /// repeats a key.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| KeyscopeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let map: Self = serde_json::from_str(&text).map_err(|source| KeyscopeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = map.len(), "loaded key map");
        Ok(map)
    }

    /// New name for `key`, if it is mapped.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `key` renamed, or `key` itself when unmapped.
    #[must_use]
    pub fn rename<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source-key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'de> Deserialize<'de> for RootMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RootMapVisitor;

        impl<'de> Visitor<'de> for RootMapVisitor {
            type Value = RootMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping old key names to new key names")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<RootMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = RootMap::new();
                while let Some((from, to)) = access.next_entry::<String, String>()? {
                    map.insert(from, to).map_err(de::Error::custom)?;
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(RootMapVisitor)
    }
}
