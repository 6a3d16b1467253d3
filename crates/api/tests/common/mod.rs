use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use devhub_ai::GeminiGateway;
use devhub_api::config::ServerConfig;
use devhub_api::routes;
use devhub_api::state::AppState;
use devhub_github::GitHubClient;
use devhub_storage::{ImageUploader, MemoryObjectStore, ObjectStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// No Gemini key, so AI endpoints exercise the not-configured path
/// unless a test overrides it.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_read_timeout_secs: 5,
        gemini_api_key: None,
        gemini_api_base: devhub_ai::DEFAULT_API_BASE.to_string(),
        github_api_base: devhub_github::DEFAULT_API_BASE.to_string(),
        github_quick_profiles: vec!["octocat".to_string(), "torvalds".to_string()],
        s3_bucket: "devhub-test".to_string(),
        s3_endpoint_url: None,
        s3_public_base_url: "https://cdn.test".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and an in-memory object store.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool, Arc::new(MemoryObjectStore::default()))
}

/// Same as [`build_test_app`], but with a caller-supplied object store
/// so upload tests can inspect writes or force failures.
pub fn build_test_app_with_store(pool: PgPool, store: Arc<dyn ObjectStore>) -> Router {
    let config = test_config();

    let ai = Arc::new(GeminiGateway::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
    ));
    let github = Arc::new(GitHubClient::new(config.github_api_base.clone()));
    let uploader = Arc::new(ImageUploader::new(store, config.s3_public_base_url.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config),
        ai,
        github,
        uploader,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid project create payload.
pub fn sample_project_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A sample project used in tests",
        "category": "Utility",
        "tags": ["Rust", "Axum"],
        "image_url": "https://example.com/cover.png",
        "demo_url": null,
        "repo_url": "https://github.com/example/sample",
        "featured": false
    })
}
