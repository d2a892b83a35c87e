use std::sync::Arc;

use haru::application::ports::{ChatGateway, ChatGatewayError, ChatHistory};
use haru::application::services::{ChatError, ChatService};
use haru::domain::{Chatroom, ChatroomId, UserId};

struct MockChatGateway {
    history_ended: bool,
}

#[async_trait::async_trait]
impl ChatGateway for MockChatGateway {
    async fn open_chatroom(&self, _user: &UserId) -> Result<ChatroomId, ChatGatewayError> {
        Ok(ChatroomId::new("room-1"))
    }

    async fn send_message(
        &self,
        _chatroom: &ChatroomId,
        text: &str,
    ) -> Result<String, ChatGatewayError> {
        Ok(format!("echo: {}", text))
    }

    async fn history(
        &self,
        _chatroom: &ChatroomId,
        _limit: usize,
    ) -> Result<ChatHistory, ChatGatewayError> {
        Ok(ChatHistory {
            messages: vec![],
            ended: self.history_ended,
        })
    }

    async fn chatrooms(&self, _user: &UserId) -> Result<Vec<Chatroom>, ChatGatewayError> {
        Ok(vec![])
    }

    async fn close(&self, _chatroom: &ChatroomId) -> Result<(), ChatGatewayError> {
        Ok(())
    }
}

fn service(history_ended: bool) -> ChatService<MockChatGateway> {
    ChatService::new(Arc::new(MockChatGateway { history_ended }))
}

fn room() -> ChatroomId {
    ChatroomId::new("room-1")
}

#[tokio::test]
async fn given_message_when_sending_then_returns_exchange_with_bot_reply() {
    let chat = service(false);

    let exchange = chat.send_message(&room(), "  hello there  ").await.unwrap();

    assert_eq!(exchange.user_message, "hello there");
    assert_eq!(exchange.bot_response, "echo: hello there");
}

#[tokio::test]
async fn given_blank_message_when_sending_then_rejected_locally() {
    let chat = service(false);

    assert!(matches!(
        chat.send_message(&room(), "   ").await,
        Err(ChatError::EmptyMessage)
    ));
}

#[tokio::test]
async fn given_closed_room_when_sending_then_rejected_locally() {
    let chat = service(false);
    chat.close(&room()).await.unwrap();

    assert!(matches!(
        chat.send_message(&room(), "hello").await,
        Err(ChatError::ConversationEnded(_))
    ));
}

#[tokio::test]
async fn given_ended_history_when_syncing_then_room_is_marked_closed() {
    let chat = service(true);
    assert!(!chat.is_closed(&room()).await);

    chat.history(&room(), 10).await.unwrap();

    assert!(chat.is_closed(&room()).await);
}

#[tokio::test]
async fn given_closed_room_when_closing_again_then_rejected() {
    let chat = service(false);
    chat.close(&room()).await.unwrap();

    assert!(matches!(
        chat.close(&room()).await,
        Err(ChatError::ConversationEnded(_))
    ));
}
