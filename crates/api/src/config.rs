/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. The one secret is
/// `GEMINI_API_KEY`; its absence is not an error -- it disables the
/// AI-dependent features and is reported through `/api/v1/capabilities`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bounded wait for the catalog read before serving the fallback
    /// catalog (default: `5`). Applies to reads only; writes carry no
    /// extra timeout beyond the request timeout.
    pub catalog_read_timeout_secs: u64,
    /// Gemini credential; `None` disables chat and import structuring.
    pub gemini_api_key: Option<String>,
    /// Gemini API base URL.
    pub gemini_api_base: String,
    /// GitHub API base URL.
    pub github_api_base: String,
    /// Preset account names offered by the import UI, parsed from
    /// comma-separated `GITHUB_QUICK_PROFILES`.
    pub github_quick_profiles: Vec<String>,
    /// Bucket for uploaded cover images.
    pub s3_bucket: String,
    /// Custom S3-compatible endpoint, if any.
    pub s3_endpoint_url: Option<String>,
    /// Public base URL under which uploaded objects resolve.
    pub s3_public_base_url: String,
}

fn split_csv(value: String) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                                       |
    /// |-----------------------------|-----------------------------------------------|
    /// | `HOST`                      | `0.0.0.0`                                     |
    /// | `PORT`                      | `3000`                                        |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`                       |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                                          |
    /// | `CATALOG_READ_TIMEOUT_SECS` | `5`                                           |
    /// | `GEMINI_API_KEY`            | (unset -- AI features disabled)               |
    /// | `GEMINI_API_BASE`           | `https://generativelanguage.googleapis.com`   |
    /// | `GITHUB_API_BASE`           | `https://api.github.com`                      |
    /// | `GITHUB_QUICK_PROFILES`     | (empty)                                       |
    /// | `S3_BUCKET`                 | `devhub-images`                               |
    /// | `S3_ENDPOINT_URL`           | (unset -- ambient AWS endpoint)               |
    /// | `S3_PUBLIC_BASE_URL`        | `http://localhost:9000/devhub-images`         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_csv(
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog_read_timeout_secs: u64 = std::env::var("CATALOG_READ_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("CATALOG_READ_TIMEOUT_SECS must be a valid u64");

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let gemini_api_base = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| devhub_ai::DEFAULT_API_BASE.into());

        let github_api_base = std::env::var("GITHUB_API_BASE")
            .unwrap_or_else(|_| devhub_github::DEFAULT_API_BASE.into());

        let github_quick_profiles =
            split_csv(std::env::var("GITHUB_QUICK_PROFILES").unwrap_or_default());

        let s3_bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| "devhub-images".into());
        let s3_endpoint_url = std::env::var("S3_ENDPOINT_URL").ok().filter(|s| !s.is_empty());
        let s3_public_base_url = std::env::var("S3_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:9000/devhub-images".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog_read_timeout_secs,
            gemini_api_key,
            gemini_api_base,
            github_api_base,
            github_quick_profiles,
            s3_bucket,
            s3_endpoint_url,
            s3_public_base_url,
        }
    }
}
