//! Route definitions for the chat assistant.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat`.
///
/// ```text
/// POST /          -> send_message (SSE stream)
/// GET  /history   -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(chat::send_message))
        .route("/history", get(chat::history))
}
