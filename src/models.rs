//! Activity Models
//!
//! Data structures shared across the picker, storage, and views.

use serde::{Deserialize, Serialize};

/// Activity category. Serialized lowercase in storage; anything we don't
/// recognize decodes as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outdoor,
    Learn,
    Relax,
    Creative,
    #[serde(other)]
    Other,
}

impl Category {
    /// Categories offered by the add-activity form.
    pub const SELECTABLE: [Category; 4] = [
        Category::Outdoor,
        Category::Learn,
        Category::Relax,
        Category::Creative,
    ];

    /// Display icon, derived from the category and never persisted.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Outdoor => "🚴",
            Category::Learn => "💻",
            Category::Relax => "☕",
            Category::Creative => "🎨",
            Category::Other => "💡",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Outdoor => "Outdoor",
            Category::Learn => "Learn",
            Category::Relax => "Relax",
            Category::Creative => "Create",
            Category::Other => "Other",
        }
    }
}

/// Category filter for a roll: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// A suggestable activity. Seed entries ship with the app; custom entries
/// are user-created and deletable. The icon is not a field, it is
/// recomputed from `category` wherever it is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub custom: bool,
}

impl Activity {
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_follows_category() {
        assert_eq!(Category::Outdoor.icon(), "🚴");
        assert_eq!(Category::Other.icon(), "💡");

        let activity = Activity {
            id: "x".to_string(),
            name: "Anything".to_string(),
            description: "".to_string(),
            category: Category::Relax,
            custom: false,
        };
        assert_eq!(activity.icon(), Category::Relax.icon());
    }

    #[test]
    fn test_filter_matching() {
        assert!(CategoryFilter::All.matches(Category::Creative));
        assert!(CategoryFilter::Only(Category::Learn).matches(Category::Learn));
        assert!(!CategoryFilter::Only(Category::Learn).matches(Category::Relax));
    }

    #[test]
    fn test_category_decodes_lowercase_and_unknown() {
        let decoded: Category = serde_json::from_str("\"outdoor\"").unwrap();
        assert_eq!(decoded, Category::Outdoor);

        // Categories written by older or foreign versions fall back to Other.
        let unknown: Category = serde_json::from_str("\"gardening\"").unwrap();
        assert_eq!(unknown, Category::Other);
    }
}
