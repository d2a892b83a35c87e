use async_trait::async_trait;

use crate::domain::{ChatroomId, ConversationEndStatus};

#[async_trait]
pub trait EndStatusProvider: Send + Sync {
    async fn end_status(
        &self,
        chatroom: &ChatroomId,
    ) -> Result<ConversationEndStatus, EndStatusError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EndStatusError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
