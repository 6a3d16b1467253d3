//! Incremental parser for server-sent-event payloads.
//!
//! The streaming endpoint delivers `data: {json}` events separated by
//! blank lines, but network chunks split anywhere, including inside a
//! line. [`SseBuffer`] accumulates chunks and yields complete `data`
//! payloads as they become available.

/// Stateful line buffer for an SSE byte stream.
#[derive(Debug, Default)]
pub struct SseBuffer {
    pending: String,
}

impl SseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes, returning every complete `data:` payload
    /// it finishes. Non-data lines (comments, event names, blanks) are
    /// skipped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.push_str(&String::from_utf8_lossy(chunk));

        let mut payloads = Vec::new();
        while let Some(newline) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=newline).collect();
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(data) = line.strip_prefix("data:") {
                let data = data.trim_start();
                if !data.is_empty() {
                    payloads.push(data.to_string());
                }
            }
        }
        payloads
    }
}
