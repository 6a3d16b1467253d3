//! Route definitions for the GitHub importer.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

/// Routes mounted at `/import`.
///
/// ```text
/// GET  /profiles  -> quick_profiles
/// POST /preview   -> preview
/// POST /commit    -> commit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(import::quick_profiles))
        .route("/preview", post(import::preview))
        .route("/commit", post(import::commit))
}
