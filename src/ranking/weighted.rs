use serde::{Deserialize, Serialize};

use crate::core::{Item, SynonymTable};
use crate::ranking::collation::TitleKey;
use crate::ranking::{Ranker, ScoredItem};
use crate::tokenize::{is_blank, tokenize};

/// Points awarded per expansion term found in each item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Any tag contains the term
    pub tag: u32,

    /// Title contains the term
    pub title: u32,

    /// Description contains the term
    pub description: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            tag: 2,
            title: 3,
            description: 1,
        }
    }
}

impl ScoreWeights {
    /// All weights zero: nothing can ever score.
    pub fn is_zero(&self) -> bool {
        self.tag == 0 && self.title == 0 && self.description == 0
    }
}

/// Lower-cased copy of the searchable fields of one item.
struct Haystack {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl Haystack {
    fn new(item: &Item) -> Self {
        Self {
            title: item.title.to_lowercase(),
            description: item.description.to_lowercase(),
            tags: item.tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn score(&self, tokens: &[String], synonyms: &SynonymTable, weights: &ScoreWeights) -> u32 {
        let mut score = 0u32;
        for token in tokens {
            for term in synonyms.expand(token) {
                if self.tags.iter().any(|tag| tag.contains(term)) {
                    score = score.saturating_add(weights.tag);
                }
                if self.title.contains(term) {
                    score = score.saturating_add(weights.title);
                }
                if self.description.contains(term) {
                    score = score.saturating_add(weights.description);
                }
            }
        }
        score
    }
}

/// Relevance of `item` for already-tokenized query `tokens`.
///
/// Every token is expanded through `synonyms`; each expansion term adds the
/// field weight once per field it appears in (as a substring). Repeated tokens
/// and overlapping synonym lists add again.
pub fn score(item: &Item, tokens: &[String], synonyms: &SynonymTable, weights: &ScoreWeights) -> u32 {
    Haystack::new(item).score(tokens, synonyms, weights)
}

/// Score the whole catalog, sort best first (ties by title) and drop zero
/// scores.
pub fn rank_scored<'a>(
    catalog: &'a [Item],
    tokens: &[String],
    synonyms: &SynonymTable,
    weights: &ScoreWeights,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<(ScoredItem<'a>, TitleKey)> = catalog
        .iter()
        .map(|item| {
            let score = Haystack::new(item).score(tokens, synonyms, weights);
            (ScoredItem::new(item, score), TitleKey::new(&item.title))
        })
        .filter(|(scored, _)| scored.score > 0)
        .collect();

    scored.sort_by(|(a, a_key), (b, b_key)| b.score.cmp(&a.score).then_with(|| a_key.cmp(b_key)));
    scored.into_iter().map(|(scored, _)| scored).collect()
}

/// Rank `catalog` against `query` with the default weights.
///
/// A blank query returns the first `default_count` items unscored.
pub fn rank<'a>(
    catalog: &'a [Item],
    query: &str,
    synonyms: &SynonymTable,
    default_count: usize,
) -> Vec<&'a Item> {
    rank_with_weights(catalog, query, synonyms, default_count, &ScoreWeights::default())
}

pub fn rank_with_weights<'a>(
    catalog: &'a [Item],
    query: &str,
    synonyms: &SynonymTable,
    default_count: usize,
    weights: &ScoreWeights,
) -> Vec<&'a Item> {
    if is_blank(query) {
        return catalog.iter().take(default_count).collect();
    }

    let tokens = tokenize(query);
    rank_scored(catalog, &tokens, synonyms, weights)
        .into_iter()
        .map(|s| s.item)
        .collect()
}

/// Synonym-expanded weighted substring ranker
#[derive(Debug, Clone, Default)]
pub struct WeightedRanker {
    synonyms: SynonymTable,
    weights: ScoreWeights,
}

impl WeightedRanker {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self {
            synonyms,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Score a single item against a raw query.
    pub fn score(&self, item: &Item, query: &str) -> u32 {
        score(item, &tokenize(query), &self.synonyms, &self.weights)
    }
}

impl Ranker for WeightedRanker {
    fn rank<'a>(&self, query: &str, catalog: &'a [Item]) -> Vec<ScoredItem<'a>> {
        let tokens = tokenize(query);
        rank_scored(catalog, &tokens, &self.synonyms, &self.weights)
    }

    fn name(&self) -> &str {
        "weighted"
    }
}
