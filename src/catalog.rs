use std::collections::HashSet;
use std::path::Path;

use crate::core::Item;
use crate::error::{MatcherError, Result};

/// Suggestion queries shown next to the search box in the demo.
pub const SAMPLE_QUERIES: &[&str] = &[
    "derivatives",
    "calculus",
    "photosynthesis",
    "world war 2",
    "essay writing",
    "quantum mechanics",
];

/// Fixed, validated item list. Ids are unique; order is catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(MatcherError::DuplicateItemId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MatcherError::io(path, e))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} catalog items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First `count` items in catalog order
    pub fn default_picks(&self, count: usize) -> &[Item] {
        &self.items[..count.min(self.items.len())]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The seven-video demo catalog.
    pub fn sample() -> Self {
        let items = vec![
            Item::new(1, "Derivatives - Intuitive Explanation")
                .with_description("Understand derivatives and rates of change with visual examples.")
                .with_tags(["calculus", "derivative", "math", "rates"]),
            Item::new(2, "Photosynthesis for Beginners")
                .with_description("Learn how plants convert light into chemical energy.")
                .with_tags(["biology", "photosynthesis", "plants", "energy"]),
            Item::new(3, "World War II Overview")
                .with_description("A concise overview of the causes and major events of WW2.")
                .with_tags(["history", "ww2", "wars", "20th century"]),
            Item::new(4, "Integrals: Area Under the Curve")
                .with_description("Visual explanation of integrals and accumulation.")
                .with_tags(["calculus", "integral", "math", "area"]),
            Item::new(5, "The Krebs Cycle")
                .with_description("Biochemistry: step-by-step breakdown of the Krebs cycle.")
                .with_tags(["biology", "biochemistry", "krebs", "cellular respiration"]),
            Item::new(6, "Essay Writing: Structure & Tips")
                .with_description("Best practices for organizing study essays and exams.")
                .with_tags(["writing", "study skills", "essays"]),
            Item::new(7, "Quantum Mechanics - Core Ideas")
                .with_description("Simplified concepts of quantum physics for beginners.")
                .with_tags(["physics", "quantum", "science"]),
        ];
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_catalog_is_valid() {
        let sample = Catalog::sample();
        assert_eq!(sample.len(), 7);
        assert!(Catalog::new(sample.items().to_vec()).is_ok());
        assert_eq!(sample.get(5).unwrap().title, "The Krebs Cycle");
        assert!(sample.get(42).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![Item::new(1, "A"), Item::new(2, "B"), Item::new(1, "C")];
        assert!(matches!(Catalog::new(items), Err(MatcherError::DuplicateItemId(1))));
    }

    #[test]
    fn test_default_picks() {
        let sample = Catalog::sample();
        let picks: Vec<u32> = sample.default_picks(4).iter().map(|i| i.id).collect();
        assert_eq!(picks, vec![1, 2, 3, 4]);
        assert_eq!(sample.default_picks(100).len(), 7);
        assert!(Catalog::default().default_picks(4).is_empty());
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": 1, "title": "One", "desc": "first", "tags": ["a"]},
                {"id": 2, "title": "Two", "description": "second"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].description, "first");
        assert!(catalog.items()[1].tags.is_empty());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 10, "title": "Ten"}}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.get(10).unwrap().title, "Ten");
    }

    #[test]
    fn test_load_duplicate_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}, {{"id": 1}}]"#).unwrap();

        assert!(matches!(
            Catalog::load(file.path()),
            Err(MatcherError::DuplicateItemId(1))
        ));
    }
}
