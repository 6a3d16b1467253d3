//! Chat transcript model.
//!
//! A transcript is an append-only sequence of messages for the life of
//! one chat session. Each turn appends the user message plus an empty
//! model placeholder; the placeholder is filled in once, keyed by its
//! message id, when the reply finishes streaming. Keying by id means
//! overlapping turns cannot complete into each other's placeholder.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Fixed reply shown when the upstream AI stream fails mid-turn.
pub const STREAM_ERROR_MESSAGE: &str =
    "System overload. I'm having trouble reaching the neural network. Please verify API configuration.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    /// Empty while the reply is still streaming; filled in once on
    /// completion.
    pub text: String,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Append-only message transcript.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message and an empty model placeholder, returning
    /// the placeholder's id for later completion.
    pub fn begin_turn(&mut self, user_text: impl Into<String>) -> Uuid {
        self.messages.push(ChatMessage::new(ChatRole::User, user_text));
        let placeholder = ChatMessage::new(ChatRole::Model, "");
        let reply_id = placeholder.id;
        self.messages.push(placeholder);
        reply_id
    }

    /// Fill the placeholder with the given id. Applies at most once;
    /// an unknown id or an already-filled placeholder is a no-op.
    ///
    /// Returns `true` if the text was recorded.
    pub fn complete_turn(&mut self, reply_id: Uuid, full_text: &str) -> bool {
        match self
            .messages
            .iter_mut()
            .find(|m| m.id == reply_id && m.role == ChatRole::Model && m.text.is_empty())
        {
            Some(placeholder) => {
                placeholder.text = full_text.to_string();
                true
            }
            None => false,
        }
    }
}
