pub mod item;
pub mod recommendation;
pub mod synonyms;

pub use item::Item;
pub use recommendation::{Recommendation, RecommendationEntry, RecommendationKind};
pub use synonyms::SynonymTable;
