use serde::{Deserialize, Serialize};

/// A catalog entry (a video in the demo catalog).
///
/// Items are loaded once and never mutated; ranking only borrows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique, stable identifier within a catalog
    pub id: u32,

    /// Display title (weighted highest when matching)
    #[serde(default)]
    pub title: String,

    /// Free-text description
    #[serde(default, alias = "desc")]
    pub description: String,

    /// Tags/keywords, order preserved
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Create a new Item with an empty description and no tags
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Get display name (for logging/CLI)
    pub fn display_name(&self) -> String {
        format!("#{} {}", self.id, self.title)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Derivatives - Intuitive Explanation")
            .with_description("Understand derivatives")
            .with_tags(["calculus", "math"]);
        assert_eq!(item.id, 1);
        assert_eq!(item.title, "Derivatives - Intuitive Explanation");
        assert_eq!(item.tags, vec!["calculus".to_string(), "math".to_string()]);
        assert_eq!(item.display_name(), "#1 Derivatives - Intuitive Explanation");
    }

    #[test]
    fn test_desc_alias() {
        let item = Item::from_json(r#"{"id": 3, "title": "WW2", "desc": "Overview", "tags": ["wars"]}"#)
            .unwrap();
        assert_eq!(item.description, "Overview");
        assert_eq!(item.tags, vec!["wars".to_string()]);
    }

    #[test]
    fn test_missing_fields_default() {
        let item = Item::from_json(r#"{"id": 9}"#).unwrap();
        assert!(item.title.is_empty());
        assert!(item.description.is_empty());
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_serialization() {
        let item = Item::new(5, "The Krebs Cycle");
        let json = item.to_json().unwrap();
        assert!(json.contains("\"description\""));
        assert_eq!(Item::from_json(&json).unwrap(), item);
    }
}
