//! Repository for the `projects` table.

use sqlx::PgPool;
use uuid::Uuid;

use devhub_core::project::Project;

use crate::models::project::{NewProject, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, tags, image_url, demo_url, repo_url, featured, created_at";

/// Wrap a domain translation failure as a sqlx decode error so repo
/// signatures stay uniform.
fn decode_err(err: devhub_core::CoreError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects, newest `created_at` first (ties broken by id
    /// for a stable order).
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        rows.into_iter()
            .map(|r| r.into_domain().map_err(decode_err))
            .collect()
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(|r| r.into_domain().map_err(decode_err)).transpose()
    }

    /// Insert a new project, returning the created row with its
    /// server-assigned id and creation date.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, category, tags, image_url, demo_url, repo_url, featured, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.as_str())
            .bind(&input.tags)
            .bind(&input.image_url)
            .bind(&input.demo_url)
            .bind(&input.repo_url)
            .bind(input.featured)
            .bind(input.created_at)
            .fetch_one(pool)
            .await?;
        row.into_domain().map_err(decode_err)
    }

    /// Full-record replace keyed by id. `created_at` is never rewritten.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &NewProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                description = $3,
                category = $4,
                tags = $5,
                image_url = $6,
                demo_url = $7,
                repo_url = $8,
                featured = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.as_str())
            .bind(&input.tags)
            .bind(&input.image_url)
            .bind(&input.demo_url)
            .bind(&input.repo_url)
            .bind(input.featured)
            .fetch_optional(pool)
            .await?;
        row.map(|r| r.into_domain().map_err(decode_err)).transpose()
    }

    /// Delete a project by id. Returns `true` if a row was removed;
    /// a missing row is reported as `false`, not an error.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
