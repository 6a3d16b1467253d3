//! Catalog filtering and incremental pagination.
//!
//! This module implements the view contract over the in-memory catalog:
//! a category filter, a free-text search, and a "load more" pagination
//! model where the visible count grows one page at a time and resets
//! whenever the filter inputs change. The caller models the reset by
//! sending `pages = 1` after a filter change and incrementing `pages`
//! on each "load more".

use serde::{Deserialize, Serialize};

use crate::project::{Category, Project};

/// Number of catalog entries revealed per "load more" step.
pub const PAGE_SIZE: usize = 9;

/// Category filter: either the `All` sentinel or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter label. "All" (or absence) selects everything;
    /// anything else must be a valid category label.
    pub fn parse(label: &str) -> Option<Self> {
        if label == "All" {
            Some(Self::All)
        } else {
            Category::parse(label).map(Self::Only)
        }
    }
}

/// Inputs for one catalog page computation.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub filter: CategoryFilter,
    /// Free-text search; empty means "match everything".
    pub search: String,
    /// Accumulated "load more" count. 1 = first page.
    pub pages: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            search: String::new(),
            pages: 1,
        }
    }
}

/// One computed page of the filtered catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    /// The first `visible_count` entries of the filtered set, in
    /// catalog order.
    pub items: Vec<Project>,
    /// Size of the full filtered set.
    pub total_filtered: usize,
    /// How many entries are currently revealed.
    pub visible_count: usize,
    /// True iff another "load more" would reveal additional entries.
    pub has_more: bool,
}

/// Whether a single project passes the category + search filter.
///
/// A project is visible iff the category filter is `All` or matches
/// exactly, AND the search text is empty or is a case-insensitive
/// substring of the title or of any tag.
pub fn matches_filter(project: &Project, filter: CategoryFilter, search: &str) -> bool {
    let matches_category = match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(cat) => project.category == cat,
    };
    if !matches_category {
        return false;
    }
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Compute the visible page for a query over the full catalog.
///
/// `pages` is clamped to at least 1; the visible count never exceeds
/// the filtered-set length.
pub fn compute_page(catalog: &[Project], query: &CatalogQuery) -> CatalogPage {
    let filtered: Vec<&Project> = catalog
        .iter()
        .filter(|p| matches_filter(p, query.filter, &query.search))
        .collect();

    let total_filtered = filtered.len();
    // `pages` comes straight off the query string; saturate instead of
    // trusting it to stay in multiplication range.
    let visible_count = query
        .pages
        .max(1)
        .saturating_mul(PAGE_SIZE)
        .min(total_filtered);

    CatalogPage {
        items: filtered[..visible_count].iter().map(|p| (*p).clone()).collect(),
        total_filtered,
        visible_count,
        has_more: visible_count < total_filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn make_project(n: u128, title: &str, category: Category, tags: Vec<&str>) -> Project {
        Project {
            id: Uuid::from_u128(n),
            title: title.to_string(),
            description: "desc".to_string(),
            category,
            tags: tags.into_iter().map(String::from).collect(),
            image_url: "https://example.com/img.png".to_string(),
            demo_url: None,
            repo_url: None,
            featured: false,
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn sample_catalog() -> Vec<Project> {
        vec![
            make_project(1, "Neon Nexus", Category::Ecommerce, vec!["Next.js", "Stripe"]),
            make_project(2, "Quantum Grid", Category::Dashboard, vec!["React", "D3.js"]),
            make_project(3, "Aura Assistant", Category::AiMl, vec!["Gemini API", "React 19"]),
            make_project(4, "Drift Landing", Category::LandingPage, vec!["Astro"]),
        ]
    }

    // -- matches_filter tests --

    #[test]
    fn test_all_filter_empty_search_matches_everything() {
        let catalog = sample_catalog();
        for p in &catalog {
            assert!(matches_filter(p, CategoryFilter::All, ""));
        }
    }

    #[test]
    fn test_category_filter_excludes_other_categories() {
        let catalog = sample_catalog();
        let filter = CategoryFilter::Only(Category::Dashboard);
        let visible: Vec<_> = catalog
            .iter()
            .filter(|p| matches_filter(p, filter, ""))
            .collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Quantum Grid");
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let p = make_project(1, "Neon Nexus", Category::Ecommerce, vec![]);
        assert!(matches_filter(&p, CategoryFilter::All, "NEXUS"));
        assert!(matches_filter(&p, CategoryFilter::All, "neon"));
        assert!(!matches_filter(&p, CategoryFilter::All, "quantum"));
    }

    #[test]
    fn test_search_matches_tags_case_insensitive() {
        let p = make_project(1, "Untitled", Category::Utility, vec!["TypeScript"]);
        assert!(matches_filter(&p, CategoryFilter::All, "typescript"));
        assert!(matches_filter(&p, CategoryFilter::All, "Script"));
    }

    #[test]
    fn test_search_and_category_are_conjunctive() {
        let p = make_project(1, "Neon Nexus", Category::Ecommerce, vec!["Stripe"]);
        // Title matches but category does not.
        assert!(!matches_filter(
            &p,
            CategoryFilter::Only(Category::Web3),
            "nexus"
        ));
    }

    // -- compute_page tests --

    fn big_catalog(len: u128) -> Vec<Project> {
        (0..len)
            .map(|i| make_project(i, &format!("Project {i}"), Category::Utility, vec![]))
            .collect()
    }

    #[test]
    fn test_fresh_page_shows_one_page_size() {
        let catalog = big_catalog(30);
        let page = compute_page(&catalog, &CatalogQuery::default());
        assert_eq!(page.visible_count, PAGE_SIZE);
        assert_eq!(page.items.len(), PAGE_SIZE);
        assert_eq!(page.total_filtered, 30);
        assert!(page.has_more);
    }

    #[test]
    fn test_load_more_grows_by_page_size() {
        let catalog = big_catalog(30);
        let query = CatalogQuery {
            pages: 2,
            ..Default::default()
        };
        let page = compute_page(&catalog, &query);
        assert_eq!(page.visible_count, 2 * PAGE_SIZE);
        assert!(page.has_more);
    }

    #[test]
    fn test_visible_count_never_exceeds_filtered_length() {
        let catalog = big_catalog(12);
        let query = CatalogQuery {
            pages: 5,
            ..Default::default()
        };
        let page = compute_page(&catalog, &query);
        assert_eq!(page.visible_count, 12);
        assert!(!page.has_more);
    }

    #[test]
    fn test_has_more_boundary_exact_multiple() {
        let catalog = big_catalog(PAGE_SIZE as u128);
        let page = compute_page(&catalog, &CatalogQuery::default());
        assert_eq!(page.visible_count, PAGE_SIZE);
        assert!(!page.has_more, "has_more must be false at exact fit");
    }

    #[test]
    fn test_zero_pages_clamps_to_one() {
        let catalog = big_catalog(30);
        let query = CatalogQuery {
            pages: 0,
            ..Default::default()
        };
        let page = compute_page(&catalog, &query);
        assert_eq!(page.visible_count, PAGE_SIZE);
    }

    #[test]
    fn test_huge_pages_value_saturates() {
        // `pages` is caller-controlled input; the multiplication must
        // saturate instead of overflowing.
        let catalog = big_catalog(30);
        let query = CatalogQuery {
            pages: usize::MAX,
            ..Default::default()
        };
        let page = compute_page(&catalog, &query);
        assert_eq!(page.visible_count, 30);
        assert!(!page.has_more);
    }

    #[test]
    fn test_filtered_page_subset_property() {
        // The visible set must be exactly the filter-passing subset,
        // truncated to the visible count, in catalog order.
        let catalog = sample_catalog();
        let query = CatalogQuery {
            filter: CategoryFilter::All,
            search: "react".to_string(),
            pages: 1,
        };
        let page = compute_page(&catalog, &query);
        let expected: Vec<_> = catalog
            .iter()
            .filter(|p| matches_filter(p, query.filter, &query.search))
            .cloned()
            .collect();
        assert_eq!(page.items, expected);
        assert_eq!(page.total_filtered, 2); // "Quantum Grid" + "Aura Assistant"
    }

    #[test]
    fn test_empty_search_results() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            search: "does-not-exist".to_string(),
            ..Default::default()
        };
        let page = compute_page(&catalog, &query);
        assert_eq!(page.total_filtered, 0);
        assert_eq!(page.visible_count, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Web3"),
            Some(CategoryFilter::Only(Category::Web3))
        );
        assert_eq!(CategoryFilter::parse("Bogus"), None);
    }
}
