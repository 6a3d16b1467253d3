use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Whether a Gemini credential was present at startup. When false,
    /// the chat and import-preview endpoints return `AI_NOT_CONFIGURED`.
    pub ai_enabled: bool,
}

/// GET /api/v1/capabilities
pub async fn get_capabilities(State(state): State<AppState>) -> Json<DataResponse<Capabilities>> {
    Json(DataResponse {
        data: Capabilities {
            ai_enabled: state.ai.is_configured(),
        },
    })
}
