use async_trait::async_trait;

use crate::domain::{ChatMessage, Chatroom, ChatroomId, UserId};

/// A chatroom's message log plus its ended flag, as reported by the
/// backend in one response.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
    pub ended: bool,
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn open_chatroom(&self, user: &UserId) -> Result<ChatroomId, ChatGatewayError>;

    /// Sends one user message and returns the bot's reply.
    async fn send_message(
        &self,
        chatroom: &ChatroomId,
        text: &str,
    ) -> Result<String, ChatGatewayError>;

    async fn history(
        &self,
        chatroom: &ChatroomId,
        limit: usize,
    ) -> Result<ChatHistory, ChatGatewayError>;

    async fn chatrooms(&self, user: &UserId) -> Result<Vec<Chatroom>, ChatGatewayError>;

    async fn close(&self, chatroom: &ChatroomId) -> Result<(), ChatGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatGatewayError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
