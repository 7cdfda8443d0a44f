use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::message::ChatMessage;

/// A saved resume: the full interview transcript plus user-supplied metadata.
/// The ATS score is computed server-side when the resume is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub created: DateTime<Utc>,
    pub status: String,
    pub messages: Vec<ChatMessage>,
    pub ats_score: u8,
}
