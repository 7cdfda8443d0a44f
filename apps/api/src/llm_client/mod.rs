/// LLM Client — the single point of entry for all AI gateway calls.
///
/// ARCHITECTURAL RULE: No other module may call the gateway directly.
/// All upstream chat-completion requests MUST go through this module.
///
/// Model: google/gemini-3-flash-preview (hardcoded — do not make configurable
/// to prevent drift)
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::message::ChatMessage;

const GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
/// The model used for all chat calls.
pub const MODEL: &str = "google/gemini-3-flash-preview";

/// Raw response bytes from the gateway, handed to the relay for passthrough.
pub type ByteStream = BoxStream<'static, Result<Bytes, reqwest::Error>>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by gateway")]
    RateLimited,

    #[error("gateway quota exhausted")]
    QuotaExhausted,

    #[error("gateway error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<OutboundMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// The single gateway client shared by all chat requests.
///
/// Holds no per-request state: each call issues exactly one outbound request
/// and hands the response byte stream straight back. Failures are surfaced
/// immediately — retry and back-off are the caller's concern.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    gateway_url: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self::with_gateway_url(api_key, GATEWAY_URL.to_string())
    }

    /// Overrides the gateway endpoint; used to point at a local stub.
    pub fn with_gateway_url(api_key: String, gateway_url: String) -> Self {
        Self {
            // No overall timeout: response bodies are long-lived streams.
            // A connect timeout still fails fast on a dead gateway host.
            client: Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            gateway_url,
        }
    }

    /// Starts a streaming chat completion: the system message first, then
    /// the caller's messages verbatim — no trimming, no history compaction.
    ///
    /// On success, returns the raw response byte stream for passthrough.
    /// Status classification: 429 → `RateLimited`, 402 → `QuotaExhausted`,
    /// any other non-success → `Api` with the response body attached for
    /// server-side logging.
    pub async fn stream_chat(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<ByteStream, LlmError> {
        let request_body = build_request(system, messages);

        let response = self
            .client
            .post(&self.gateway_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), body));
        }

        debug!("gateway stream opened ({} caller messages)", messages.len());
        Ok(response.bytes_stream().boxed())
    }
}

/// System message first, then the caller-supplied sequence verbatim.
fn build_request<'a>(system: &'a str, messages: &'a [ChatMessage]) -> ChatCompletionRequest<'a> {
    let mut outbound = Vec::with_capacity(messages.len() + 1);
    outbound.push(OutboundMessage {
        role: "system",
        content: system,
    });
    outbound.extend(messages.iter().map(|m| OutboundMessage {
        role: m.role.as_str(),
        content: &m.content,
    }));

    ChatCompletionRequest {
        model: MODEL,
        messages: outbound,
        stream: true,
    }
}

fn classify_failure(status: u16, body: String) -> LlmError {
    match status {
        429 => LlmError::RateLimited,
        402 => LlmError::QuotaExhausted,
        _ => LlmError::Api {
            status,
            message: body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(
            classify_failure(429, String::new()),
            LlmError::RateLimited
        ));
        assert!(matches!(
            classify_failure(402, String::new()),
            LlmError::QuotaExhausted
        ));
        assert!(matches!(
            classify_failure(500, "boom".to_string()),
            LlmError::Api { status: 500, message } if message == "boom"
        ));
        assert!(matches!(
            classify_failure(401, String::new()),
            LlmError::Api { status: 401, .. }
        ));
    }

    #[test]
    fn outbound_request_puts_system_first() {
        let messages = vec![ChatMessage::user("hello"), ChatMessage::assistant("hi")];
        let request = build_request("sys", &messages);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "sys");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][2]["role"], "assistant");
        assert_eq!(json["stream"], true);
        assert_eq!(json["model"], MODEL);
    }
}
