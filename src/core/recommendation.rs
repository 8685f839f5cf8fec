use serde::{Deserialize, Serialize};

use crate::core::Item;

/// How a recommendation was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Blank query, first catalog items returned unscored
    Default,
    /// At least one item scored above zero
    Scored,
    /// Query matched nothing
    NoResults,
}

/// One ranked item. `score` is `None` for default picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub item: Item,
    pub score: Option<u32>,
}

/// Ordered recommendation list with metadata, handed to the rendering side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// The query as received
    pub query: String,

    /// Result kind
    pub kind: RecommendationKind,

    /// Items in rank order
    #[serde(default)]
    pub entries: Vec<RecommendationEntry>,

    /// Ranking latency in milliseconds
    pub latency_ms: f64,

    /// Ranking method used (weighted, default)
    pub ranking_method: String,
}

impl Recommendation {
    pub fn new(query: impl Into<String>, kind: RecommendationKind, latency_ms: f64) -> Self {
        Self {
            query: query.into(),
            kind,
            entries: Vec::new(),
            latency_ms,
            ranking_method: String::from("unknown"),
        }
    }

    pub fn add_entry(&mut self, item: Item, score: Option<u32>) {
        self.entries.push(RecommendationEntry { item, score });
    }

    /// Set ranking method
    pub fn with_ranking_method(mut self, method: impl Into<String>) -> Self {
        self.ranking_method = method.into();
        self
    }

    /// Item ids in rank order
    pub fn ids(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.item.id).collect()
    }

    /// Best entry, the one a UI would preview first
    pub fn top(&self) -> Option<&RecommendationEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.top() {
            Some(top) => format!(
                "'{}' -> {} results, top: {} [{}] {:?}",
                self.query,
                self.len(),
                top.item.display_name(),
                self.ranking_method,
                self.kind
            ),
            None => format!("'{}' -> no results [{}]", self.query, self.ranking_method),
        }
    }
}
