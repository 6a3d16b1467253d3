use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use devhub_ai::AiError;
use devhub_core::error::CoreError;
use devhub_github::GitHubError;
use devhub_storage::StorageError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and adapter error types and implements
/// [`IntoResponse`] to produce consistent `{error, code}` JSON bodies.
/// Each external failure cause keeps a distinguishable code so the
/// client can render a specific message instead of a generic one.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `devhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An AI gateway error.
    #[error(transparent)]
    Ai(#[from] AiError),

    /// A source-hosting API error.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// An object storage error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- AI gateway errors ---
            AppError::Ai(ai) => match ai {
                AiError::NotConfigured => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AI_NOT_CONFIGURED",
                    "AI features are disabled: set GEMINI_API_KEY to enable them".to_string(),
                ),
                AiError::MalformedOutput(msg) => {
                    tracing::error!(error = %msg, "Malformed AI structured output");
                    (
                        StatusCode::BAD_GATEWAY,
                        "AI_MALFORMED_OUTPUT",
                        "The AI returned output that does not match the expected schema; nothing was imported".to_string(),
                    )
                }
                other => {
                    tracing::error!(error = %other, "AI upstream error");
                    (
                        StatusCode::BAD_GATEWAY,
                        "AI_UPSTREAM_ERROR",
                        "The AI service could not be reached".to_string(),
                    )
                }
            },

            // --- Source-hosting errors ---
            AppError::GitHub(gh) => match gh {
                GitHubError::UserNotFound(_) => {
                    (StatusCode::NOT_FOUND, "GITHUB_USER_NOT_FOUND", gh.to_string())
                }
                GitHubError::RateLimited => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "GITHUB_RATE_LIMITED",
                    gh.to_string(),
                ),
                other => {
                    tracing::error!(error = %other, "GitHub upstream error");
                    (
                        StatusCode::BAD_GATEWAY,
                        "GITHUB_ERROR",
                        "The GitHub API could not be reached".to_string(),
                    )
                }
            },

            // --- Storage errors ---
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::BAD_GATEWAY,
                    "STORAGE_ERROR",
                    "Image upload failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
