pub mod chat;
pub mod health;
pub mod import;
pub mod projects;
pub mod uploads;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /capabilities                    feature availability (GET)
///
/// /projects                        list (catalog query), create
/// /projects/{id}                   get, update, delete
///
/// /uploads/images                  upload cover image (POST, multipart)
///
/// /import/profiles                 preset account names (GET)
/// /import/preview                  list + structure repositories (POST)
/// /import/commit                   insert reviewed drafts (POST)
///
/// /chat                            streaming chat turn (POST, SSE)
/// /chat/history                    session transcript (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/capabilities",
            get(handlers::capabilities::get_capabilities),
        )
        .nest("/projects", projects::router())
        .nest("/uploads", uploads::router())
        .nest("/import", import::router())
        .nest("/chat", chat::router())
}
