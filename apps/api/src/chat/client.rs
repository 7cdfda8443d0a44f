//! Client side of the chat relay: issues the request, decodes the event
//! stream incrementally, and surfaces the relay's failure classes as
//! distinct errors so callers can present each one differently.

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::decoder::StreamDecoder;
use crate::models::message::ChatMessage;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    QuotaExhausted(String),

    #[error("{0}")]
    Service(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Consumer of the relay endpoint. One instance can serve many sequential
/// chat turns; each call to [`send`](Self::send) owns its own decoder.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    chat_url: String,
}

impl ChatClient {
    /// `base_url` is the relay's root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: format!("{}/api/v1/chat", base_url.into().trim_end_matches('/')),
        }
    }

    /// Sends the conversation so far and streams back the assistant reply.
    ///
    /// `on_delta` fires once per text fragment, in arrival order. Returns
    /// the finalized assistant text once the stream completes.
    pub async fn send(
        &self,
        messages: &[ChatMessage],
        category: Option<&str>,
        mut on_delta: impl FnMut(&str),
    ) -> Result<String, ClientError> {
        let response = self
            .http
            .post(&self.chat_url)
            .json(&ChatRequestBody { messages, category })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(classify_error(status.as_u16(), body.error));
        }

        let mut decoder = StreamDecoder::new();
        let mut stream = response.bytes_stream();

        // Drain the transport to completion even after the sentinel; the
        // decoder discards anything that follows it.
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            for delta in decoder.feed(&chunk) {
                on_delta(&delta);
            }
        }
        for delta in decoder.finish() {
            on_delta(&delta);
        }

        Ok(decoder.into_accumulated())
    }
}

fn classify_error(status: u16, message: Option<String>) -> ClientError {
    match status {
        429 => ClientError::RateLimited(
            message.unwrap_or_else(|| "Rate limit exceeded. Please wait a moment.".to_string()),
        ),
        402 => ClientError::QuotaExhausted(
            message.unwrap_or_else(|| "Usage limit reached.".to_string()),
        ),
        _ => ClientError::Service(
            message.unwrap_or_else(|| "Failed to connect to AI service".to_string()),
        ),
    }
}
