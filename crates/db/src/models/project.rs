//! Project row model and write DTOs.
//!
//! The row shape mirrors the `projects` table (snake_case, `category`
//! as its storage label); [`ProjectRow::into_domain`] translates it
//! into the application-side [`Project`] type.

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

use devhub_core::project::{Category, Project};
use devhub_core::CoreError;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDate,
}

impl ProjectRow {
    /// Translate the storage row into the domain type.
    ///
    /// The `category` CHECK constraint makes an unknown label
    /// impossible in practice; if one ever appears the row is reported
    /// as an internal error rather than silently coerced.
    pub fn into_domain(self) -> Result<Project, CoreError> {
        let category = Category::parse(&self.category).ok_or_else(|| {
            CoreError::Internal(format!(
                "Project {} has unknown category '{}'",
                self.id, self.category
            ))
        })?;
        Ok(Project {
            id: self.id,
            title: self.title,
            description: self.description,
            category,
            tags: self.tags,
            image_url: self.image_url,
            demo_url: self.demo_url,
            repo_url: self.repo_url,
            featured: self.featured,
            created_at: self.created_at,
        })
    }
}

/// DTO for inserting a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Omitted for form creates (the store assigns today); supplied by
    /// the importer, which carries the repository's creation date.
    pub created_at: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ProjectRow {
        ProjectRow {
            id: Uuid::from_u128(7),
            title: "Test".into(),
            description: "Desc".into(),
            category: "Web3".into(),
            tags: vec!["Solidity".into()],
            image_url: "https://example.com/x.png".into(),
            demo_url: None,
            repo_url: None,
            featured: false,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_row_maps_to_domain() {
        let project = sample_row().into_domain().unwrap();
        assert_eq!(project.category, Category::Web3);
        assert_eq!(project.tags, vec!["Solidity"]);
    }

    #[test]
    fn test_unknown_category_is_internal_error() {
        let mut row = sample_row();
        row.category = "Mystery".into();
        assert!(matches!(
            row.into_domain(),
            Err(CoreError::Internal(_))
        ));
    }
}
