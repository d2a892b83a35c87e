use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatGateway, ChatGatewayError, ChatHistory};
use crate::domain::{ChatMessage, Chatroom, ChatroomId, UserId};

use super::client::{error_text, ApiClient};

pub struct HttpChatGateway {
    client: ApiClient,
}

#[derive(Serialize)]
struct OpenChatroomRequest<'a> {
    user_id: &'a str,
}

#[derive(Deserialize)]
struct OpenChatroomResponse {
    session_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chatroom_id: &'a str,
    user_message: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    bot_response: String,
}

#[derive(Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    chats: Vec<HistoryItem>,
    #[serde(default)]
    conversation_end: bool,
}

#[derive(Deserialize)]
struct HistoryItem {
    #[serde(default)]
    user_message: String,
    #[serde(default)]
    bot_response: String,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ChatroomsResponse {
    #[serde(default)]
    sessions: Vec<ChatroomItem>,
}

#[derive(Deserialize)]
struct ChatroomItem {
    chatroom_id: String,
    created_at: Option<DateTime<Utc>>,
}

impl HttpChatGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn open_chatroom(&self, user: &UserId) -> Result<ChatroomId, ChatGatewayError> {
        let response = self
            .client
            .post("/chat/session")
            .json(&OpenChatroomRequest {
                user_id: user.as_str(),
            })
            .send()
            .await
            .map_err(|e| ChatGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatGatewayError::RequestFailed(error_text(response).await));
        }

        let parsed: OpenChatroomResponse = response
            .json()
            .await
            .map_err(|e| ChatGatewayError::InvalidResponse(e.to_string()))?;
        Ok(ChatroomId::new(parsed.session_id))
    }

    async fn send_message(
        &self,
        chatroom: &ChatroomId,
        text: &str,
    ) -> Result<String, ChatGatewayError> {
        let response = self
            .client
            .post("/chat/message")
            .json(&SendMessageRequest {
                chatroom_id: chatroom.as_str(),
                user_message: text,
            })
            .send()
            .await
            .map_err(|e| ChatGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatGatewayError::RequestFailed(error_text(response).await));
        }

        let parsed: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| ChatGatewayError::InvalidResponse(e.to_string()))?;
        Ok(parsed.bot_response)
    }

    async fn history(
        &self,
        chatroom: &ChatroomId,
        limit: usize,
    ) -> Result<ChatHistory, ChatGatewayError> {
        let response = self
            .client
            .get(&format!("/chat/{}", chatroom.as_str()))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| ChatGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatGatewayError::RequestFailed(error_text(response).await));
        }

        let parsed: HistoryResponse = response
            .json()
            .await
            .map_err(|e| ChatGatewayError::InvalidResponse(e.to_string()))?;

        let messages = parsed
            .chats
            .into_iter()
            .map(|item| ChatMessage {
                user_message: item.user_message,
                bot_response: item.bot_response,
                created_at: item.created_at.unwrap_or_else(Utc::now),
            })
            .collect();

        Ok(ChatHistory {
            messages,
            ended: parsed.conversation_end,
        })
    }

    async fn chatrooms(&self, user: &UserId) -> Result<Vec<Chatroom>, ChatGatewayError> {
        let response = self
            .client
            .get(&format!("/chat/history/{}", user.as_str()))
            .send()
            .await
            .map_err(|e| ChatGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatGatewayError::RequestFailed(error_text(response).await));
        }

        let parsed: ChatroomsResponse = response
            .json()
            .await
            .map_err(|e| ChatGatewayError::InvalidResponse(e.to_string()))?;

        Ok(parsed
            .sessions
            .into_iter()
            .map(|item| Chatroom {
                id: ChatroomId::new(item.chatroom_id),
                opened_at: item.created_at,
            })
            .collect())
    }

    async fn close(&self, chatroom: &ChatroomId) -> Result<(), ChatGatewayError> {
        let response = self
            .client
            .put(&format!("/chat/{}/end", chatroom.as_str()))
            .send()
            .await
            .map_err(|e| ChatGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatGatewayError::RequestFailed(error_text(response).await));
        }
        Ok(())
    }
}
