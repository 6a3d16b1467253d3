//! Route definitions for image uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /images  -> upload_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/images", post(uploads::upload_image))
}
