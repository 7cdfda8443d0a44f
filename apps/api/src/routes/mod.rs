pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat relay
        .route("/api/v1/chat", post(chat_handlers::handle_chat))
        // Saved resumes
        .route(
            "/api/v1/users/:user_id/resumes",
            get(resume_handlers::handle_list_resumes).post(resume_handlers::handle_create_resume),
        )
        .route(
            "/api/v1/users/:user_id/resumes/:resume_id",
            delete(resume_handlers::handle_delete_resume),
        )
        .with_state(state)
}
