use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::MatcherConfig;
use crate::core::{Recommendation, RecommendationKind, SynonymTable};
use crate::ranking::{Ranker, WeightedRanker};
use crate::tokenize::{is_blank, tokenize};

/// Main recommendation orchestrator
///
/// Owns the catalog, the ranker and the config. `recommend` takes `&self`
/// only, so one instance can be shared behind an `Arc`.
pub struct Recommender {
    catalog: Catalog,
    ranker: Arc<dyn Ranker>,
    config: MatcherConfig,
}

impl Recommender {
    /// Create a recommender with the weighted ranker and default config
    pub fn new(catalog: Catalog, synonyms: SynonymTable) -> Self {
        Self::with_config(catalog, synonyms, MatcherConfig::default())
    }

    pub fn with_config(catalog: Catalog, synonyms: SynonymTable, config: MatcherConfig) -> Self {
        let ranker = WeightedRanker::new(synonyms).with_weights(config.weights);
        Self::with_ranker(catalog, Arc::new(ranker), config)
    }

    /// Use a custom ranker. `config.weights` is ignored by rankers that do
    /// not read it.
    pub fn with_ranker(catalog: Catalog, ranker: Arc<dyn Ranker>, config: MatcherConfig) -> Self {
        tracing::debug!(
            "Recommender ready: {} items, ranker={}, default_count={}",
            catalog.len(),
            ranker.name(),
            config.default_count
        );
        Self {
            catalog,
            ranker,
            config,
        }
    }

    /// Recommend items for `query`.
    ///
    /// A blank query yields the default picks unscored; anything else is
    /// ranked and may come back empty.
    pub fn recommend(&self, query: &str) -> Recommendation {
        let start = Instant::now();

        if is_blank(query) {
            let picks = self.catalog.default_picks(self.config.default_count);
            let mut recommendation =
                Recommendation::new(query, RecommendationKind::Default, 0.0).with_ranking_method("default");
            for item in picks {
                recommendation.add_entry(item.clone(), None);
            }
            recommendation.latency_ms = start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!("Blank query, returning {} default picks", recommendation.len());
            return recommendation;
        }

        let ranked = self.ranker.rank(query, self.catalog.items());

        let kind = if ranked.is_empty() {
            RecommendationKind::NoResults
        } else {
            RecommendationKind::Scored
        };

        let mut recommendation =
            Recommendation::new(query, kind, 0.0).with_ranking_method(self.ranker.name());
        for scored in &ranked {
            recommendation.add_entry(scored.item.clone(), Some(scored.score));
        }
        recommendation.latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            "Ranked {} items for '{}' ({} tokens): {} matches in {:.3}ms",
            self.catalog.len(),
            query,
            tokenize(query).len(),
            recommendation.len(),
            recommendation.latency_ms
        );

        recommendation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }
}
