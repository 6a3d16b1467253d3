//! The portfolio entry ("project") domain type and its category enum.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::ProjectId;

/// Closed set of portfolio categories.
///
/// `All` is deliberately NOT a variant here: it is a filter sentinel that
/// must never appear on a stored record. See [`crate::catalog::CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "E-commerce")]
    Ecommerce,
    Dashboard,
    #[serde(rename = "Landing Page")]
    LandingPage,
    Utility,
    Web3,
    #[serde(rename = "AI/ML")]
    AiMl,
}

/// Every storable category, in display order.
pub const ALL_CATEGORIES: [Category; 6] = [
    Category::Ecommerce,
    Category::Dashboard,
    Category::LandingPage,
    Category::Utility,
    Category::Web3,
    Category::AiMl,
];

impl Category {
    /// The exact label used at the storage boundary and in AI schemas.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce",
            Self::Dashboard => "Dashboard",
            Self::LandingPage => "Landing Page",
            Self::Utility => "Utility",
            Self::Web3 => "Web3",
            Self::AiMl => "AI/ML",
        }
    }

    /// Parse a storage/display label back into a category.
    pub fn parse(label: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio entry.
///
/// `created_at` is a calendar date (no time component); it drives the
/// default newest-first ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Technology tags. No duplicates; insertion order is display order.
    pub tags: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    /// Informational flag only; no filtering logic reads it.
    pub featured: bool,
    pub created_at: NaiveDate,
}

/// Remove duplicate tags while preserving first-seen order.
///
/// Comparison is exact (case-sensitive): "React" and "react" are distinct
/// technologies as far as display is concerned.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for cat in ALL_CATEGORIES {
            assert_eq!(Category::parse(cat.as_str()), Some(cat), "label: {cat}");
        }
    }

    #[test]
    fn test_category_rejects_all_sentinel() {
        // "All" is a filter, never a stored category.
        assert_eq!(Category::parse("All"), None);
    }

    #[test]
    fn test_category_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::Ecommerce).unwrap();
        assert_eq!(json, "\"E-commerce\"");
        let back: Category = serde_json::from_str("\"AI/ML\"").unwrap();
        assert_eq!(back, Category::AiMl);
    }

    #[test]
    fn test_dedup_tags_preserves_insertion_order() {
        let tags = vec![
            "React".to_string(),
            "TypeScript".to_string(),
            "React".to_string(),
            "Vite".to_string(),
            "TypeScript".to_string(),
        ];
        assert_eq!(dedup_tags(tags), vec!["React", "TypeScript", "Vite"]);
    }

    #[test]
    fn test_dedup_tags_is_case_sensitive() {
        let tags = vec!["React".to_string(), "react".to_string()];
        assert_eq!(dedup_tags(tags).len(), 2);
    }
}
