use std::sync::Arc;

use devhub_ai::GeminiGateway;
use devhub_github::GitHubClient;
use devhub_storage::ImageUploader;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: devhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gemini gateway (chat session owner + structuring calls).
    pub ai: Arc<GeminiGateway>,
    /// GitHub repository-listing client.
    pub github: Arc<GitHubClient>,
    /// Cover image uploader.
    pub uploader: Arc<ImageUploader>,
}
