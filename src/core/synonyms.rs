use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatcherError, Result};

/// Keyword → related terms, used to broaden a query token before matching.
///
/// Keys and terms are stored lower-cased so lookups with tokenizer output
/// always hit. Serialized as a plain JSON object of string arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the related terms for `keyword`.
    pub fn insert<I, S>(&mut self, keyword: impl AsRef<str>, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keyword = keyword.as_ref();
        let key = keyword.to_lowercase();
        if key != keyword {
            tracing::warn!("Synonym key '{}' normalized to '{}'", keyword, key);
        }
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        self.entries.insert(key, terms);
    }

    /// Related terms for `keyword`, empty when it has no entry.
    pub fn get(&self, keyword: &str) -> &[String] {
        self.entries
            .get(keyword)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Expansion set for a query token: the token itself first, then its
    /// related terms in table order.
    pub fn expand<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        std::iter::once(token).chain(self.get(token).iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a synonym table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MatcherError::io(path, e))?;
        let table = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} synonym entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// The demo synonym table bundled with the sample catalog.
    pub fn sample() -> Self {
        let mut table = Self::new();
        table.insert("derivatives", ["derivative", "calculus", "rates", "change"]);
        table.insert("calculus", ["integral", "derivative", "limits", "math"]);
        table.insert("photosynthesis", ["plants", "chlorophyll", "biology", "energy"]);
        table.insert("history", ["ww2", "wars", "past", "timeline"]);
        table
    }
}

impl From<BTreeMap<String, Vec<String>>> for SynonymTable {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl From<SynonymTable> for BTreeMap<String, Vec<String>> {
    fn from(table: SynonymTable) -> Self {
        table.entries
    }
}

impl<K, I, S> FromIterator<(K, I)> for SynonymTable
where
    K: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (keyword, terms) in iter {
            table.insert(keyword, terms);
        }
        table
    }
}
