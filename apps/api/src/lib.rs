//! ResumeAI backend: the chat relay that drives the resume interview, the
//! client-side stream decoding for its SSE output, and per-user saved-resume
//! storage with ATS scoring.

pub mod chat;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod resumes;
pub mod routes;
pub mod state;
