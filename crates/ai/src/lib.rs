//! Gemini gateway for the DevHub portfolio service.
//!
//! Two operations are exposed:
//!
//! - a streaming conversational call, seeded with a system instruction
//!   that embeds the current catalog so the assistant can answer
//!   catalog questions without a retrieval step; and
//! - a one-shot structured-extraction call that turns raw repository
//!   metadata into schema-constrained project drafts.
//!
//! The conversational session is process-wide, lazily created on first
//! use, and reset to uninitialized whenever a stream fails so the next
//! turn starts from a fresh context instead of a possibly-broken one.

pub mod gateway;
pub mod prompt;
pub mod protocol;
pub mod sse;

pub use gateway::GeminiGateway;

/// Default Gemini API base. Overridable for tests.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Model used for both chat and structuring.
pub const MODEL: &str = "gemini-2.5-flash";

/// Errors from the AI gateway.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No API key was supplied. Checked up front, never discovered
    /// halfway through a call.
    #[error("Gemini API key is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The structuring response did not conform to the draft schema.
    /// Treated as a total failure of the batch, never a partial one.
    #[error("Gemini returned malformed structured output: {0}")]
    MalformedOutput(String),

    /// The SSE stream broke or carried an unparseable event.
    #[error("Gemini stream error: {0}")]
    Stream(String),
}
