//! Saved resumes: per-user CRUD over interview transcripts, with an ATS
//! score computed at save time.

pub mod ats;
pub mod handlers;
pub mod store;
