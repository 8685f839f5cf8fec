pub mod collation;
pub mod weighted;

use crate::core::Item;

pub use collation::{compare_titles, TitleKey};
pub use weighted::{rank, rank_scored, rank_with_weights, score, ScoreWeights, WeightedRanker};

/// Trait for ranking implementations
pub trait Ranker: Send + Sync {
    /// Score `catalog` against `query` and return matches sorted best first.
    /// Items scoring zero are not returned.
    fn rank<'a>(&self, query: &str, catalog: &'a [Item]) -> Vec<ScoredItem<'a>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Catalog item with its relevance score, alive for one ranking call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub item: &'a Item,
    pub score: u32,
}

impl<'a> ScoredItem<'a> {
    pub fn new(item: &'a Item, score: u32) -> Self {
        Self { item, score }
    }
}
