//! Saved-resume store — pluggable, trait-based per-user resume persistence.
//!
//! Default: `MemoryResumeStore` (process-local, mirrors the browser-storage
//! model the product ships with; durability is explicitly not a goal).
//! The trait is the seam where a durable backend would plug in.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;
use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::StoredResume;

/// Per-user CRUD over saved resumes. Listing preserves insertion order.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<StoredResume>, AppError>;

    async fn add(&self, user_id: &str, resume: StoredResume) -> Result<(), AppError>;

    /// Returns `false` if no resume with that id exists for the user.
    async fn delete(&self, user_id: &str, resume_id: Uuid) -> Result<bool, AppError>;
}

/// In-memory store keyed by opaque user id.
#[derive(Default)]
pub struct MemoryResumeStore {
    inner: RwLock<HashMap<String, Vec<StoredResume>>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn list(&self, user_id: &str) -> Result<Vec<StoredResume>, AppError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AppError::Internal(anyhow!("resume store lock poisoned")))?;
        Ok(inner.get(user_id).cloned().unwrap_or_default())
    }

    async fn add(&self, user_id: &str, resume: StoredResume) -> Result<(), AppError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AppError::Internal(anyhow!("resume store lock poisoned")))?;
        inner.entry(user_id.to_string()).or_default().push(resume);
        Ok(())
    }

    async fn delete(&self, user_id: &str, resume_id: Uuid) -> Result<bool, AppError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AppError::Internal(anyhow!("resume store lock poisoned")))?;
        let Some(resumes) = inner.get_mut(user_id) else {
            return Ok(false);
        };
        let before = resumes.len();
        resumes.retain(|r| r.id != resume_id);
        Ok(resumes.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn resume(title: &str) -> StoredResume {
        StoredResume {
            id: Uuid::new_v4(),
            title: title.to_string(),
            role: None,
            company: None,
            created: Utc::now(),
            status: "draft".to_string(),
            messages: vec![],
            ats_score: 0,
        }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryResumeStore::new();
        store.add("alice", resume("first")).await.unwrap();
        store.add("alice", resume("second")).await.unwrap();

        let listed = store.list("alice").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "first");
        assert_eq!(listed[1].title, "second");
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = MemoryResumeStore::new();
        store.add("alice", resume("hers")).await.unwrap();

        assert!(store.list("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = MemoryResumeStore::new();
        let keep = resume("keep");
        let drop = resume("drop");
        let drop_id = drop.id;
        store.add("alice", keep).await.unwrap();
        store.add("alice", drop).await.unwrap();

        assert!(store.delete("alice", drop_id).await.unwrap());
        let listed = store.list("alice").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "keep");

        // Second delete of the same id reports absence
        assert!(!store.delete("alice", drop_id).await.unwrap());
        assert!(!store.delete("nobody", drop_id).await.unwrap());
    }
}
