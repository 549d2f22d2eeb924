use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Record;

// =============================================================================
// News Category
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NewsCategory {
    #[default]
    General,
    Academic,
    Event,
    Achievement,
}

impl NewsCategory {
    /// The one category list: admin dropdowns and public filters both read
    /// this, so a record saved under any entry always renders somewhere.
    pub const ALL: [NewsCategory; 4] = [
        NewsCategory::General,
        NewsCategory::Academic,
        NewsCategory::Event,
        NewsCategory::Achievement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::General => "General",
            NewsCategory::Academic => "Academic",
            NewsCategory::Event => "Event",
            NewsCategory::Achievement => "Achievement",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "General" => Some(NewsCategory::General),
            "Academic" => Some(NewsCategory::Academic),
            "Event" => Some(NewsCategory::Event),
            "Achievement" => Some(NewsCategory::Achievement),
            _ => None,
        }
    }
}

// =============================================================================
// News Item
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: NewsCategory,
    pub date: DateTime<Utc>,
    /// Absent on the wire means unpublished.
    #[serde(default)]
    pub published: bool,
}

impl Record for NewsItem {
    const COLLECTION: &'static str = "news";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Admin form payload. The record's date is not part of the form; saving
/// stamps the current time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: NewsCategory,
    pub published: bool,
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            image_url: None,
            category: NewsCategory::General,
            published: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_category_round_trip() {
        for category in NewsCategory::ALL {
            assert_eq!(NewsCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(NewsCategory::from_str("Sports"), None);
    }

    #[test]
    fn test_published_defaults_to_false() {
        let item: NewsItem = serde_json::from_value(serde_json::json!({
            "title": "Convocation",
            "content": "Details to follow.",
            "category": "General",
            "date": "2024-01-15T00:00:00Z"
        }))
        .unwrap();
        assert!(!item.published);
        assert_eq!(item.image_url, None);
        assert_eq!(item.id, "");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let item = NewsItem {
            id: "n1".to_string(),
            title: "Title".to_string(),
            content: "Body".to_string(),
            image_url: Some("https://example.com/a.jpg".to_string()),
            category: NewsCategory::Event,
            date: Utc::now(),
            published: true,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert_eq!(value["category"], "Event");
    }
}
