use async_trait::async_trait;

use crate::domain::ChatroomId;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Requests the conversation summary for a chatroom. `Ok(None)` models
    /// a response that carries no summary text.
    async fn summarize(&self, chatroom: &ChatroomId) -> Result<Option<String>, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
