//! Handlers for the `/projects` resource: the catalog view and the
//! admin CRUD surface.

use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use devhub_core::catalog::{compute_page, CatalogPage, CatalogQuery, CategoryFilter};
use devhub_core::error::CoreError;
use devhub_core::fallback::fallback_catalog;
use devhub_core::project::{dedup_tags, Category, Project};
use devhub_db::models::project::NewProject;
use devhub_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::query::CatalogParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Write payload for create and update. `created_at` is deliberately
/// absent: the store assigns it on create and never rewrites it.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectPayload {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectPayload {
    fn into_new_project(self) -> NewProject {
        NewProject {
            title: self.title,
            description: self.description,
            category: self.category,
            tags: dedup_tags(self.tags),
            image_url: self.image_url,
            demo_url: self.demo_url,
            repo_url: self.repo_url,
            featured: self.featured,
            created_at: None,
        }
    }
}

/// Load the full catalog with the availability-over-consistency read
/// contract: a bounded wait, then the fixed fallback catalog on any
/// error, timeout, or empty result. The read path never surfaces a
/// hard error -- the portfolio must always render something.
pub async fn load_catalog(state: &AppState) -> Vec<Project> {
    let wait = Duration::from_secs(state.config.catalog_read_timeout_secs);
    match tokio::time::timeout(wait, ProjectRepo::list(&state.pool)).await {
        Ok(Ok(projects)) if !projects.is_empty() => projects,
        Ok(Ok(_)) => {
            tracing::warn!("Catalog read returned zero rows, serving fallback catalog");
            fallback_catalog()
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Catalog read failed, serving fallback catalog");
            fallback_catalog()
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = wait.as_secs(),
                "Catalog read timed out, serving fallback catalog"
            );
            fallback_catalog()
        }
    }
}

/// GET /api/v1/projects
///
/// The filtered, incrementally paginated catalog view.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Json<DataResponse<CatalogPage>>> {
    let filter = match params.category.as_deref() {
        None => CategoryFilter::All,
        Some(label) => CategoryFilter::parse(label)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown category '{label}'")))?,
    };

    let query = CatalogQuery {
        filter,
        search: params.q.unwrap_or_default(),
        pages: params.pages.unwrap_or(1),
    };

    let catalog = load_catalog(&state).await;
    Ok(Json(DataResponse {
        data: compute_page(&catalog, &query),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectPayload>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input.into_new_project()).await?;
    tracing::info!(project_id = %project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
///
/// Full-record replace; partial patches are not supported.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProjectPayload>,
) -> AppResult<Json<Project>> {
    input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input.into_new_project())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
