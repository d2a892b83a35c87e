use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::{ChatGateway, ChatGatewayError, ChatHistory};
use crate::domain::{ChatMessage, Chatroom, ChatroomId, UserId};

/// Chat orchestration: open rooms, exchange messages with the bot, and
/// track which rooms have ended so input is rejected locally afterwards.
pub struct ChatService<C>
where
    C: ChatGateway,
{
    gateway: Arc<C>,
    closed: RwLock<HashSet<ChatroomId>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("conversation already ended for chatroom {0}")]
    ConversationEnded(ChatroomId),
    #[error("empty message")]
    EmptyMessage,
    #[error(transparent)]
    Gateway(#[from] ChatGatewayError),
}

impl<C> ChatService<C>
where
    C: ChatGateway,
{
    pub fn new(gateway: Arc<C>) -> Self {
        Self {
            gateway,
            closed: RwLock::new(HashSet::new()),
        }
    }

    pub async fn open_chatroom(&self, user: &UserId) -> Result<ChatroomId, ChatError> {
        let chatroom = self.gateway.open_chatroom(user).await?;
        tracing::info!(chatroom = %chatroom, "Chatroom opened");
        Ok(chatroom)
    }

    pub async fn send_message(
        &self,
        chatroom: &ChatroomId,
        text: &str,
    ) -> Result<ChatMessage, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.closed.read().await.contains(chatroom) {
            return Err(ChatError::ConversationEnded(chatroom.clone()));
        }

        let bot_response = self.gateway.send_message(chatroom, text).await?;
        Ok(ChatMessage::new(text.to_string(), bot_response))
    }

    /// Reads the room history and syncs the local ended flag from it.
    pub async fn history(
        &self,
        chatroom: &ChatroomId,
        limit: usize,
    ) -> Result<ChatHistory, ChatError> {
        let history = self.gateway.history(chatroom, limit).await?;
        if history.ended {
            self.closed.write().await.insert(chatroom.clone());
        }
        Ok(history)
    }

    pub async fn chatrooms(&self, user: &UserId) -> Result<Vec<Chatroom>, ChatError> {
        Ok(self.gateway.chatrooms(user).await?)
    }

    pub async fn close(&self, chatroom: &ChatroomId) -> Result<(), ChatError> {
        if self.closed.read().await.contains(chatroom) {
            return Err(ChatError::ConversationEnded(chatroom.clone()));
        }
        self.gateway.close(chatroom).await?;
        self.closed.write().await.insert(chatroom.clone());
        tracing::info!(chatroom = %chatroom, "Chatroom closed");
        Ok(())
    }

    pub async fn is_closed(&self, chatroom: &ChatroomId) -> bool {
        self.closed.read().await.contains(chatroom)
    }
}
