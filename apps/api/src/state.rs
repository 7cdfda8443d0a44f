use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable resume store. Default: MemoryResumeStore.
    pub resumes: Arc<dyn ResumeStore>,
    pub config: Config,
}
