//! Handlers for the GitHub bulk importer.
//!
//! Import is a two-step flow: `preview` lists the given accounts'
//! repositories, drops forks, asks the AI to structure the remainder
//! into portfolio entries, and returns the merged drafts for review;
//! `commit` inserts a reviewed set of drafts. Commit is not atomic:
//! each draft is inserted independently and the response reports how
//! many made it, so a mid-batch failure leaves the earlier inserts in
//! place rather than rolling back work the operator already approved.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use devhub_core::import::{exclude_forks, merge_drafts, ProjectDraft, RepoSummary};
use devhub_db::models::project::NewProject;
use devhub_db::repositories::project_repo::ProjectRepo;
use devhub_github::parse_accounts;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Comma-separated account names, as typed in the import form.
    pub accounts: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub drafts: Vec<ProjectDraft>,
    /// Non-fork repository count that fed the structuring call.
    pub repo_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CommitRequest {
    pub drafts: Vec<ProjectDraft>,
}

#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub imported: usize,
    pub total: usize,
}

/// GET /api/v1/import/profiles
///
/// Preset account names the import form offers as one-click choices.
pub async fn quick_profiles(State(state): State<AppState>) -> Json<DataResponse<Vec<String>>> {
    Json(DataResponse {
        data: state.config.github_quick_profiles.clone(),
    })
}

/// POST /api/v1/import/preview
pub async fn preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> AppResult<Json<DataResponse<PreviewResponse>>> {
    let accounts = parse_accounts(&request.accounts);
    if accounts.is_empty() {
        return Err(AppError::BadRequest(
            "At least one account name is required".into(),
        ));
    }

    let mut repos: Vec<RepoSummary> = Vec::new();
    for account in &accounts {
        repos.extend(state.github.list_repos(account).await?);
    }
    let repos = exclude_forks(repos);
    if repos.is_empty() {
        return Err(AppError::BadRequest(
            "No importable repositories found (forks are excluded)".into(),
        ));
    }

    let structured = state.ai.structure_repositories(&repos).await?;
    let drafts = merge_drafts(structured, &repos, Utc::now().date_naive());

    tracing::info!(
        accounts = accounts.len(),
        repos = repos.len(),
        drafts = drafts.len(),
        "Prepared import preview"
    );

    Ok(Json(DataResponse {
        data: PreviewResponse {
            repo_count: repos.len(),
            drafts,
        },
    }))
}

/// POST /api/v1/import/commit
pub async fn commit(
    State(state): State<AppState>,
    Json(request): Json<CommitRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CommitResponse>>)> {
    if request.drafts.is_empty() {
        return Err(AppError::BadRequest("No drafts to import".into()));
    }

    let total = request.drafts.len();
    let mut imported = 0usize;
    for draft in request.drafts {
        let input = NewProject {
            title: draft.title,
            description: draft.description,
            category: draft.category,
            tags: draft.tags,
            image_url: draft.image_url,
            demo_url: draft.demo_url,
            repo_url: draft.repo_url,
            featured: false,
            created_at: Some(draft.created_at),
        };
        match ProjectRepo::create(&state.pool, &input).await {
            Ok(_) => imported += 1,
            Err(e) if imported == 0 => return Err(AppError::Database(e)),
            Err(e) => {
                // Earlier inserts stay; the shortfall is visible in the
                // imported/total counts.
                tracing::error!(error = %e, imported, total, "Import commit stopped mid-batch");
                break;
            }
        }
    }

    tracing::info!(imported, total, "Committed imported drafts");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CommitResponse { imported, total },
        }),
    ))
}
