//! Handlers for the portfolio chat assistant.
//!
//! `POST /chat` opens a server-sent-event stream of reply fragments.
//! The model reply is forwarded fragment by fragment as `message`
//! events; the stream ends with a `done` event, or with a single
//! `error` event carrying the fixed apologetic message when the
//! upstream stream fails (in which case the session has been reset and
//! the next turn starts fresh).

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::{Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::ReceiverStream;

use devhub_core::chat::{ChatMessage, STREAM_ERROR_MESSAGE};

use crate::error::{AppError, AppResult};
use crate::handlers::projects::load_catalog;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/v1/chat
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message must not be empty".into()));
    }

    // The catalog snapshot only seeds the system instruction on the
    // session's first turn; later turns reuse the existing context.
    let catalog = load_catalog(&state).await;
    let (reply_id, fragments) = state.ai.begin_chat_turn(&message, &catalog).await?;

    let (tx, rx) = tokio::sync::mpsc::channel::<Event>(16);
    tokio::spawn(async move {
        let mut fragments = std::pin::pin!(fragments);
        let mut full_text = String::new();

        while let Some(item) = fragments.next().await {
            match item {
                Ok(text) => {
                    full_text.push_str(&text);
                    if tx.send(Event::default().data(text)).await.is_err() {
                        // Client went away; record what we have so the
                        // session context stays coherent.
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Chat stream failed mid-turn");
                    state.ai.fail_chat_turn().await;
                    let _ = tx
                        .send(Event::default().event("error").data(STREAM_ERROR_MESSAGE))
                        .await;
                    return;
                }
            }
        }

        state.ai.complete_chat_turn(reply_id, &full_text).await;
        let _ = tx.send(Event::default().event("done").data("")).await;
    });

    let stream = ReceiverStream::new(rx).map(Ok);
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// GET /api/v1/chat/history
///
/// Snapshot of the current session transcript. Empty before the first
/// turn and after a session reset.
pub async fn history(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ChatMessage>>>> {
    Ok(Json(DataResponse {
        data: state.ai.history().await,
    }))
}
