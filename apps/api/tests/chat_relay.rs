//! End-to-end tests for the chat relay: a stub gateway and a real relay on
//! ephemeral ports, driven through the same client the CLI uses.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    http::{header, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use resumeai::chat::client::{ChatClient, ClientError};
use resumeai::chat::conversation::{Conversation, TurnState};
use resumeai::config::Config;
use resumeai::llm_client::LlmClient;
use resumeai::resumes::store::MemoryResumeStore;
use resumeai::routes::build_router;
use resumeai::state::AppState;

const FIRST_QUESTION_STREAM: &str = concat!(
    "data: {\"choices\":[{\"delta\":{\"content\":\"What is your full name?\"}}]}\n\n",
    "data: [DONE]\n\n",
);

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Stub gateway that records the request body and streams a fixed reply.
fn streaming_upstream(captured: Arc<Mutex<Option<Value>>>) -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(move |Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(body);
                (
                    [(header::CONTENT_TYPE, "text/event-stream")],
                    FIRST_QUESTION_STREAM,
                )
            }
        }),
    )
}

fn failing_upstream(status: StatusCode) -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(move || async move { (status, "upstream failure detail") }),
    )
}

async fn spawn_relay(upstream: Router) -> SocketAddr {
    let upstream_addr = spawn(upstream).await;
    let state = AppState {
        llm: LlmClient::with_gateway_url(
            "test-key".to_string(),
            format!("http://{upstream_addr}/v1/chat/completions"),
        ),
        resumes: Arc::new(MemoryResumeStore::new()),
        config: Config {
            llm_gateway_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
    };
    spawn(build_router(state)).await
}

#[tokio::test]
async fn health_reports_ok() {
    let captured = Arc::new(Mutex::new(None));
    let relay = spawn_relay(streaming_upstream(captured)).await;

    let body: Value = reqwest::get(format!("http://{relay}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "resumeai-api");
}

#[tokio::test]
async fn interview_opens_with_streamed_first_question() {
    let captured = Arc::new(Mutex::new(None));
    let relay = spawn_relay(streaming_upstream(captured.clone())).await;

    let client = ChatClient::new(format!("http://{relay}"));
    let mut conversation = Conversation::new();
    conversation.begin_assistant_turn();

    let mut deltas = Vec::new();
    let final_text = client
        .send(&[], Some("product_mnc"), |delta| {
            deltas.push(delta.to_string());
            conversation.apply_delta(delta);
        })
        .await
        .unwrap();
    conversation.complete_turn();

    assert_eq!(final_text, "What is your full name?");
    assert_eq!(deltas, vec!["What is your full name?".to_string()]);
    assert_eq!(conversation.last_assistant(), Some("What is your full name?"));
    assert_eq!(conversation.turn(), TurnState::Complete);

    // The relay prepended the category prompt and forwarded our (empty)
    // history verbatim with streaming enabled.
    let body = captured.lock().unwrap().take().unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "system");
    assert!(messages[0]["content"]
        .as_str()
        .unwrap()
        .contains("PRODUCT-BASED MNC"));
    assert_eq!(body["stream"], true);
}

#[tokio::test]
async fn relay_passes_the_event_stream_through_unmodified() {
    let captured = Arc::new(Mutex::new(None));
    let relay = spawn_relay(streaming_upstream(captured)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay}/api/v1/chat"))
        .json(&json!({ "messages": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "text/event-stream"
    );
    let body = response.text().await.unwrap();
    assert_eq!(body, FIRST_QUESTION_STREAM);
}

#[tokio::test]
async fn relay_maps_upstream_failures_to_distinct_statuses() {
    let cases = [
        (StatusCode::TOO_MANY_REQUESTS, 429),
        (StatusCode::PAYMENT_REQUIRED, 402),
        (StatusCode::INTERNAL_SERVER_ERROR, 500),
        (StatusCode::SERVICE_UNAVAILABLE, 500),
        (StatusCode::UNAUTHORIZED, 500),
    ];

    for (upstream_status, expected) in cases {
        let relay = spawn_relay(failing_upstream(upstream_status)).await;

        let response = reqwest::Client::new()
            .post(format!("http://{relay}/api/v1/chat"))
            .json(&json!({ "messages": [], "category": "startup" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), expected);
        let body: Value = response.json().await.unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
        // Upstream detail is logged, never echoed
        assert!(!message.contains("upstream failure detail"));

        match expected {
            429 => assert_eq!(message, "Rate limits exceeded, please try again later."),
            402 => assert_eq!(message, "Usage limit reached. Please add credits to continue."),
            _ => assert_eq!(message, "AI service temporarily unavailable"),
        }
    }
}

#[tokio::test]
async fn client_surfaces_distinct_error_classes() {
    let relay = spawn_relay(failing_upstream(StatusCode::TOO_MANY_REQUESTS)).await;

    let client = ChatClient::new(format!("http://{relay}"));
    let err = client.send(&[], None, |_| {}).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::RateLimited(msg) if msg == "Rate limits exceeded, please try again later."
    ));
}

#[tokio::test]
async fn malformed_request_body_is_rejected_up_front() {
    let captured = Arc::new(Mutex::new(None));
    let relay = spawn_relay(streaming_upstream(captured.clone())).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay}/api/v1/chat"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    // Never reached the gateway
    assert!(captured.lock().unwrap().is_none());
}

#[tokio::test]
async fn resumes_crud_round_trip() {
    let captured = Arc::new(Mutex::new(None));
    let relay = spawn_relay(streaming_upstream(captured)).await;
    let http = reqwest::Client::new();
    let base = format!("http://{relay}/api/v1/users/alice/resumes");

    let created: Value = http
        .post(&base)
        .json(&json!({
            "title": "Backend role",
            "role": "Software Engineer",
            "messages": [
                { "role": "user", "content": "here are my details" },
                {
                    "role": "assistant",
                    "content": "## Professional Summary\nEngineer.\n\n## Experience\n- Shipped things\n\n## Education\nB.Sc.\n\n## Skills\n- Rust"
                }
            ]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(created["title"], "Backend role");
    assert_eq!(created["status"], "draft");
    assert!(created["ats_score"].as_u64().unwrap() > 0);
    let id = created["id"].as_str().unwrap().to_string();

    let listed: Value = http.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Another user sees nothing
    let other: Value = http
        .get(format!("http://{relay}/api/v1/users/bob/resumes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(other.as_array().unwrap().is_empty());

    let deleted = http
        .delete(format!("{base}/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 200);

    let listed: Value = http.get(&base).send().await.unwrap().json().await.unwrap();
    assert!(listed.as_array().unwrap().is_empty());

    let missing = http
        .delete(format!("{base}/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);
    let body: Value = missing.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn empty_title_is_a_validation_error() {
    let captured = Arc::new(Mutex::new(None));
    let relay = spawn_relay(streaming_upstream(captured)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay}/api/v1/users/alice/resumes"))
        .json(&json!({ "title": "  ", "messages": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "title cannot be empty");
}
