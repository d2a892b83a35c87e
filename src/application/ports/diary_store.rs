use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{DiaryEntry, Emotion, UserId};

/// A diary entry awaiting persistence. The conversation-end workflow uses
/// the summary text as both content and summary field.
#[derive(Debug, Clone)]
pub struct DiaryDraft {
    pub user_id: UserId,
    pub content: String,
    pub date: DateTime<Utc>,
    pub emotion: Emotion,
    pub summary: String,
}

#[async_trait]
pub trait DiaryStore: Send + Sync {
    /// Persists a draft. `Ok(false)` models a response without a success
    /// indicator.
    async fn save(&self, draft: &DiaryDraft) -> Result<bool, DiaryStoreError>;

    async fn entries_on(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>, DiaryStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DiaryStoreError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
