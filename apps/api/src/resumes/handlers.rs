//! Axum route handlers for saved resumes.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::message::ChatMessage;
use crate::models::resume::StoredResume;
use crate::resumes::ats::compute_ats_score;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub title: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// GET /api/v1/users/:user_id/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<StoredResume>>, AppError> {
    let resumes = state.resumes.list(&user_id).await?;
    Ok(Json(resumes))
}

/// POST /api/v1/users/:user_id/resumes
///
/// Saves a finished (or in-progress) interview as a resume. The server
/// assigns the id and timestamp and computes the ATS score from the
/// transcript.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<Json<StoredResume>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let resume = StoredResume {
        id: Uuid::new_v4(),
        title: request.title,
        role: request.role,
        company: request.company,
        created: Utc::now(),
        status: request.status.unwrap_or_else(|| "draft".to_string()),
        ats_score: compute_ats_score(&request.messages),
        messages: request.messages,
    };

    state.resumes.add(&user_id, resume.clone()).await?;

    Ok(Json(resume))
}

/// DELETE /api/v1/users/:user_id/resumes/:resume_id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path((user_id, resume_id)): Path<(String, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let deleted = state.resumes.delete(&user_id, resume_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "Resume {resume_id} not found"
        )));
    }

    Ok(Json(json!({ "deleted": true })))
}
