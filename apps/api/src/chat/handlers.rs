//! Axum route handler for the chat relay.

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::chat::categories::resolve_prompt;
use crate::errors::AppError;
use crate::models::message::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub category: Option<String>,
}

/// POST /api/v1/chat
///
/// Resolves the category's system prompt, opens a streaming completion
/// against the gateway, and pipes the upstream SSE bytes through unchanged.
/// The relay never buffers or reinterprets the stream; decoding happens on
/// the consuming side.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let system = resolve_prompt(request.category.as_deref());

    let stream = state.llm.stream_chat(&system, &request.messages).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/event-stream")],
        Body::from_stream(stream),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_are_optional() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.messages.is_empty());
        assert!(request.category.is_none());

        let request: ChatRequest = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"hi"}],"category":"startup"}"#,
        )
        .unwrap();
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.category.as_deref(), Some("startup"));
    }
}
