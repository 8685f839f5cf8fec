//! # Ungaa Engine
//!
//! Meaning-based content matching over a small in-memory catalog:
//! - Tokenization into lower-case ASCII word tokens
//! - Synonym expansion of every query token
//! - Weighted substring scoring (title 3, tags 2, description 1 by default)
//! - Deterministic ordering: score descending, then title
//!
//! The crate returns data only; rendering the results is up to the caller.
//!
//! ## Example Usage
//!
//! ```rust
//! use ungaa_engine::{Catalog, Recommender, SynonymTable};
//!
//! let engine = Recommender::new(Catalog::sample(), SynonymTable::sample());
//!
//! let rec = engine.recommend("calculus");
//! let top = rec.top().expect("calculus matches the sample catalog");
//! println!("Top pick: {} ({:?})", top.item.title, top.score);
//!
//! // Blank queries return the first four catalog items
//! assert_eq!(engine.recommend("").ids(), vec![1, 2, 3, 4]);
//! ```
//!
//! The pure functions are available without an engine:
//!
//! ```rust
//! use ungaa_engine::{rank, tokenize, Catalog, SynonymTable};
//!
//! assert_eq!(tokenize("World War 2!"), vec!["world", "war", "2"]);
//!
//! let catalog = Catalog::sample();
//! let ranked = rank(catalog.items(), "history", &SynonymTable::sample(), 4);
//! assert_eq!(ranked[0].title, "World War II Overview");
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod tokenize;

// Re-export primary types
pub use catalog::{Catalog, SAMPLE_QUERIES};
pub use config::MatcherConfig;
pub use crate::core::{Item, Recommendation, RecommendationEntry, RecommendationKind, SynonymTable};
pub use engine::Recommender;
pub use error::{MatcherError, Result};
pub use ranking::{rank, score, Ranker, ScoreWeights, ScoredItem, WeightedRanker};
pub use tokenize::tokenize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
