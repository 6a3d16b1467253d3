//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Catalog view parameters (`?category=&q=&pages=`).
///
/// `category` is the "All" sentinel when absent; `q` is the free-text
/// search; `pages` is the accumulated "load more" count (1 = first
/// page, the value a client sends right after changing the filter).
#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub pages: Option<usize>,
}
