use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::ports::{EndStatusError, EndStatusProvider};
use crate::domain::{ChatroomId, ConversationEndStatus, EmotionEvent};

use super::client::{error_text, ApiClient};

pub struct HttpEndStatusProvider {
    client: ApiClient,
}

#[derive(Deserialize)]
struct EndStatusResponse {
    #[serde(default)]
    conversation_end: bool,
    #[serde(default)]
    conversation_end_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    emotions: Vec<EmotionEventItem>,
}

#[derive(Deserialize)]
struct EmotionEventItem {
    emotion: String,
    timestamp: DateTime<Utc>,
}

impl HttpEndStatusProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EndStatusProvider for HttpEndStatusProvider {
    async fn end_status(
        &self,
        chatroom: &ChatroomId,
    ) -> Result<ConversationEndStatus, EndStatusError> {
        let response = self
            .client
            .get(&format!("/calendar/end-status/{}", chatroom.as_str()))
            .send()
            .await
            .map_err(|e| EndStatusError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EndStatusError::RequestFailed(error_text(response).await));
        }

        let parsed: EndStatusResponse = response
            .json()
            .await
            .map_err(|e| EndStatusError::InvalidResponse(e.to_string()))?;

        let emotions = parsed
            .emotions
            .into_iter()
            .map(|item| {
                let emotion = item
                    .emotion
                    .parse()
                    .map_err(EndStatusError::InvalidResponse)?;
                Ok(EmotionEvent::new(emotion, item.timestamp))
            })
            .collect::<Result<Vec<_>, EndStatusError>>()?;

        Ok(ConversationEndStatus {
            ended: parsed.conversation_end,
            end_timestamp: parsed.conversation_end_timestamp,
            emotions,
        })
    }
}
