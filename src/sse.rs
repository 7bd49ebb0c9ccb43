//! SSE line framing and stream dispatch
//!
//! The advice endpoint frames events as `data: {json}` lines over a streamed
//! response body. Chunk boundaries fall anywhere, including inside a
//! multi-byte UTF-8 character, so bytes are accumulated and only complete
//! lines are decoded: `\n` is a single byte that never occurs inside a
//! multi-byte sequence, which makes per-line decoding safe without a
//! stateful text decoder.

use bytes::Bytes;
use futures::{Stream, StreamExt};

use crate::error::AdviceError;
use crate::types::{Recommendation, StreamMessage};

/// Prefix of payload-carrying SSE lines
const DATA_PREFIX: &str = "data: ";

/// Fallback for an `error` message that carries no detail
const GENERIC_ERROR: &str = "Unknown error occurred";

/// Accumulates raw response bytes and yields complete lines.
///
/// Owned by a single stream invocation; the trailing fragment after the last
/// newline is retained until the next push completes it.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buf: Vec<u8>,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain every complete line, newline excluded.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            line.pop();
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Bytes of the retained partial line.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }
}

/// Extract and parse the JSON payload of one SSE line.
///
/// Returns `None` for non-`data:` lines (keep-alives, comments), empty
/// payloads, and malformed JSON. Malformed payloads are logged and skipped;
/// they never abort the stream.
fn parse_data_line(line: &str) -> Option<StreamMessage> {
    let payload = line.strip_prefix(DATA_PREFIX)?.trim();
    if payload.is_empty() {
        return None;
    }

    match serde_json::from_str(payload) {
        Ok(message) => Some(message),
        Err(e) => {
            tracing::warn!("skipping malformed stream payload {:?}: {}", payload, e);
            None
        }
    }
}

/// How an advice stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The server sent an explicit `complete` message
    Completed,
    /// The connection closed without a `complete` message
    Disconnected,
}

/// Consume a chunk stream, dispatching each parsed message.
///
/// `on_recommendation` is invoked inline, one call per `recommendation`
/// message, in arrival order. A `complete` or `error` message terminates
/// immediately: lines still buffered behind it are discarded. An explicit
/// `error` message surfaces as [`AdviceError::Server`].
pub(crate) async fn drive<S, F>(
    mut chunks: S,
    on_recommendation: &mut F,
) -> Result<StreamEnd, AdviceError>
where
    S: Stream<Item = Result<Bytes, AdviceError>> + Unpin,
    F: FnMut(Recommendation),
{
    let mut buffer = SseLineBuffer::new();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        for line in buffer.push(&chunk) {
            let Some(message) = parse_data_line(&line) else {
                continue;
            };

            match message {
                StreamMessage::Connected { home_id } => {
                    tracing::debug!(
                        "advice stream connected, home_id: {}",
                        home_id.as_deref().unwrap_or("unknown")
                    );
                }
                StreamMessage::Recommendation {
                    recommendation: Some(rec),
                } => on_recommendation(rec),
                StreamMessage::Recommendation {
                    recommendation: None,
                } => {}
                StreamMessage::Complete => {
                    tracing::debug!("advice stream complete");
                    return Ok(StreamEnd::Completed);
                }
                StreamMessage::Error { error } => {
                    return Err(AdviceError::Server {
                        message: error.unwrap_or_else(|| GENERIC_ERROR.to_string()),
                    });
                }
                StreamMessage::Unknown => {
                    tracing::warn!("unknown stream message: {}", line);
                }
            }
        }
    }

    if !buffer.pending().is_empty() {
        tracing::debug!(
            "stream ended mid-line, discarding {} buffered bytes",
            buffer.pending().len()
        );
    }
    Ok(StreamEnd::Disconnected)
}
