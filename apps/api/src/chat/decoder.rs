//! Incremental decoder for the SSE-framed chat-completion stream.
//!
//! The relay passes the upstream byte stream through unmodified; consumers
//! feed those bytes here and get back plain-text deltas in arrival order.
//! The decoder owns all of its state (`buffer`, `accumulated`, `done`), so
//! it can be driven from any transport and unit-tested without one.

use serde::Deserialize;

/// Terminal sentinel carried as an SSE data payload.
pub const DONE_SENTINEL: &str = "[DONE]";

const DATA_PREFIX: &str = "data: ";

/// Chat-completion chunk envelope; the text fragment lives at
/// `choices[0].delta.content`.
#[derive(Debug, Deserialize)]
struct ChunkEnvelope {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

enum LineOutcome {
    /// Control line (blank, comment, or non-data field) — carries no text.
    Skip,
    /// A text fragment extracted from a data payload.
    Delta(String),
    /// The terminal sentinel.
    Done,
    /// The payload did not parse — most likely a line split across two
    /// network reads. The caller should buffer it and wait for more bytes.
    NeedMoreData,
}

/// Streaming SSE decoder for one assistant turn.
///
/// Feed raw bytes as they arrive with [`feed`](Self::feed); call
/// [`finish`](Self::finish) exactly once when the transport closes to flush
/// a last line that lacked a trailing newline. Deltas are returned in the
/// order the bytes were received, and the running concatenation is available
/// via [`accumulated`](Self::accumulated).
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: String,
    accumulated: String,
    done: bool,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a chunk of bytes, returning any complete text deltas.
    ///
    /// A line whose JSON payload fails to parse is pushed back onto the
    /// front of the buffer and retried when more bytes arrive, so a frame
    /// straddling a read boundary is never lost. Input after the terminal
    /// sentinel is drained and discarded.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut deltas = Vec::new();
        if self.done {
            return deltas;
        }

        self.buffer.push_str(&String::from_utf8_lossy(bytes));

        while let Some(newline) = self.buffer.find('\n') {
            let mut line: String = self.buffer.drain(..=newline).collect();
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }

            match parse_line(&line) {
                LineOutcome::Skip => {}
                LineOutcome::Delta(text) => {
                    self.accumulated.push_str(&text);
                    deltas.push(text);
                }
                LineOutcome::Done => {
                    self.done = true;
                    self.buffer.clear();
                    break;
                }
                LineOutcome::NeedMoreData => {
                    line.push('\n');
                    self.buffer.insert_str(0, &line);
                    break;
                }
            }
        }

        deltas
    }

    /// Flushes any residual buffered text once the transport has closed.
    ///
    /// Applies the same per-line rules as [`feed`](Self::feed); a line that
    /// still does not parse is dropped silently.
    pub fn finish(&mut self) -> Vec<String> {
        let mut deltas = Vec::new();
        let residual = std::mem::take(&mut self.buffer);

        if !self.done {
            for raw in residual.split('\n') {
                let line = raw.strip_suffix('\r').unwrap_or(raw);
                match parse_line(line) {
                    LineOutcome::Delta(text) => {
                        self.accumulated.push_str(&text);
                        deltas.push(text);
                    }
                    LineOutcome::Done => break,
                    LineOutcome::Skip | LineOutcome::NeedMoreData => {}
                }
            }
        }

        self.done = true;
        deltas
    }

    /// True once the terminal sentinel was seen or the stream was flushed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The running concatenation of all deltas extracted so far.
    pub fn accumulated(&self) -> &str {
        &self.accumulated
    }

    /// Consumes the decoder, returning the finalized assistant text.
    pub fn into_accumulated(self) -> String {
        self.accumulated
    }
}

fn parse_line(line: &str) -> LineOutcome {
    if line.starts_with(':') || line.trim().is_empty() {
        return LineOutcome::Skip;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return LineOutcome::Skip;
    };
    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return LineOutcome::Done;
    }

    match serde_json::from_str::<ChunkEnvelope>(payload) {
        Ok(envelope) => {
            let content = envelope
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content);
            match content {
                Some(text) if !text.is_empty() => LineOutcome::Delta(text),
                _ => LineOutcome::Skip,
            }
        }
        Err(_) => LineOutcome::NeedMoreData,
    }
}
