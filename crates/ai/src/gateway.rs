//! The Gemini gateway and its process-wide chat session.

use futures::{Stream, StreamExt};
use tokio::sync::Mutex;
use uuid::Uuid;

use devhub_core::chat::{ChatMessage, ChatRole, Transcript};
use devhub_core::import::{RepoSummary, StructuredProject};
use devhub_core::project::Project;

use crate::protocol::{
    chat_generation_config, parse_structured_output, structuring_generation_config, Content,
    GenerateRequest, GenerateResponse,
};
use crate::sse::SseBuffer;
use crate::{prompt, AiError, MODEL};

/// The lazily created conversational context. Holds the system
/// instruction fixed at creation time plus the running transcript.
struct ChatSession {
    system_instruction: String,
    transcript: Transcript,
}

/// Gateway wrapping the Gemini HTTP API.
///
/// The chat session is owned here, behind a mutex: one turn at a time,
/// lazily constructed on the first turn, dropped entirely when a turn
/// fails.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
    session: Mutex<Option<ChatSession>>,
}

impl GeminiGateway {
    pub fn new(api_key: Option<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            session: Mutex::new(None),
        }
    }

    /// Whether a credential is present. Checked once at startup and
    /// surfaced through the capabilities endpoint; AI routes refuse
    /// early when this is false.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn require_key(&self) -> Result<&str, AiError> {
        self.api_key.as_deref().ok_or(AiError::NotConfigured)
    }

    /// Start a streaming chat turn.
    ///
    /// Appends the user message (and the in-progress reply slot) to the
    /// session transcript, creating the session first if none exists,
    /// and returns the reply slot's id together with the fragment
    /// stream. The caller must finish the turn with
    /// [`complete_chat_turn`](Self::complete_chat_turn) (passing that
    /// id back) or [`fail_chat_turn`](Self::fail_chat_turn).
    pub async fn begin_chat_turn(
        &self,
        message: &str,
        catalog: &[Project],
    ) -> Result<(Uuid, impl Stream<Item = Result<String, AiError>> + Send + 'static), AiError>
    {
        let key = self.require_key()?;

        let mut guard = self.session.lock().await;
        let session = guard.get_or_insert_with(|| ChatSession {
            system_instruction: prompt::chat_system_instruction(catalog),
            transcript: Transcript::new(),
        });

        let reply_id = session.transcript.begin_turn(message);

        let contents: Vec<Content> = session
            .transcript
            .messages()
            .iter()
            .filter(|m| !m.text.is_empty())
            .map(|m| match m.role {
                ChatRole::User => Content::user(m.text.clone()),
                ChatRole::Model => Content::model(m.text.clone()),
            })
            .collect();

        let request = GenerateRequest {
            contents,
            system_instruction: Some(Content::system(session.system_instruction.clone())),
            generation_config: Some(chat_generation_config()),
        };

        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.api_base, MODEL
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                let status = r.status().as_u16();
                let body = r.text().await.unwrap_or_default();
                // A turn that never started still poisons the context.
                *guard = None;
                return Err(AiError::Api { status, body });
            }
            Err(e) => {
                *guard = None;
                return Err(AiError::Request(e));
            }
        };

        tracing::debug!("Gemini chat stream opened");
        Ok((reply_id, fragment_stream(response)))
    }

    /// Record the completed reply on the transcript slot the turn
    /// opened. A stale id (the session was reset while streaming) is a
    /// no-op; overlapping turns each complete their own slot.
    pub async fn complete_chat_turn(&self, reply_id: Uuid, full_text: &str) {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_mut() {
            session.transcript.complete_turn(reply_id, full_text);
        }
    }

    /// Drop the session after a mid-stream failure so the next turn
    /// starts from a fresh context.
    pub async fn fail_chat_turn(&self) {
        let mut guard = self.session.lock().await;
        *guard = None;
        tracing::warn!("Gemini chat session reset after stream failure");
    }

    /// Snapshot of the current session transcript (empty when no
    /// session exists).
    pub async fn history(&self) -> Vec<ChatMessage> {
        let guard = self.session.lock().await;
        guard
            .as_ref()
            .map(|s| s.transcript.messages().to_vec())
            .unwrap_or_default()
    }

    /// One-shot structuring call: turn raw repository metadata into
    /// schema-conformant project drafts. Any response that fails to
    /// parse as valid structured data fails the whole batch.
    pub async fn structure_repositories(
        &self,
        repos: &[RepoSummary],
    ) -> Result<Vec<StructuredProject>, AiError> {
        let key = self.require_key()?;

        let request = GenerateRequest {
            contents: vec![Content::user(prompt::structuring_prompt(repos))],
            system_instruction: None,
            generation_config: Some(structuring_generation_config()),
        };

        let url = format!("{}/v1beta/models/{}:generateContent", self.api_base, MODEL);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        let body: GenerateResponse = response.json().await?;
        let drafts = parse_structured_output(&body.text())?;
        tracing::info!(
            repos = repos.len(),
            drafts = drafts.len(),
            "Structured repositories into drafts"
        );
        Ok(drafts)
    }
}

/// Turn the raw SSE byte stream into a stream of text fragments.
fn fragment_stream(
    response: reqwest::Response,
) -> impl Stream<Item = Result<String, AiError>> + Send {
    response
        .bytes_stream()
        .scan(SseBuffer::new(), |buf, chunk| {
            let items: Vec<Result<String, AiError>> = match chunk {
                Ok(bytes) => buf.push(&bytes).into_iter().map(Ok).collect(),
                Err(e) => vec![Err(AiError::Request(e))],
            };
            futures::future::ready(Some(futures::stream::iter(items)))
        })
        .flatten()
        .filter_map(|payload| {
            futures::future::ready(match payload {
                Ok(data) => match serde_json::from_str::<GenerateResponse>(&data) {
                    Ok(chunk) => {
                        let text = chunk.text();
                        // Frames without text (safety, usage) are dropped.
                        (!text.is_empty()).then_some(Ok(text))
                    }
                    Err(e) => Some(Err(AiError::Stream(e.to_string()))),
                },
                Err(e) => Some(Err(e)),
            })
        })
}
