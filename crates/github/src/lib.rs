//! Client for the public GitHub repository-listing API.
//!
//! Read-only and unauthenticated. Not-found accounts and rate limiting
//! are distinct error conditions so the importer can surface a specific
//! message per cause instead of a generic failure string.

use devhub_core::import::RepoSummary;

/// Default API base. Overridable for tests and proxies.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Listing page size, matching the original import flow.
const PER_PAGE: u32 = 30;

/// Errors from the GitHub listing layer.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// The account name does not exist.
    #[error("GitHub user '{0}' not found")]
    UserNotFound(String),

    /// The API refused the request due to rate limiting.
    #[error("GitHub API rate limit exceeded; try again later")]
    RateLimited,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// GitHub returned an unexpected non-2xx status.
    #[error("GitHub API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for the GitHub REST API.
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// List an account's repositories, most recently updated first.
    pub async fn list_repos(&self, account: &str) -> Result<Vec<RepoSummary>, GitHubError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base, account, PER_PAGE
        );

        let response = self
            .client
            .get(&url)
            // GitHub requires a User-Agent on API requests.
            .header("User-Agent", "devhub-portfolio")
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            200 => {
                let repos: Vec<RepoSummary> = response.json().await?;
                tracing::debug!(account, count = repos.len(), "Listed GitHub repositories");
                Ok(repos)
            }
            404 => Err(GitHubError::UserNotFound(account.to_string())),
            403 | 429 => Err(GitHubError::RateLimited),
            code => {
                let body = response.text().await.unwrap_or_default();
                Err(GitHubError::Api { status: code, body })
            }
        }
    }
}

/// Split a comma-separated account list into trimmed, non-empty names.
pub fn parse_accounts(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}
