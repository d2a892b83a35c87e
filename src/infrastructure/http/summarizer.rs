use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::ChatroomId;

use super::client::{error_text, ApiClient};

pub struct HttpSummarizer {
    client: ApiClient,
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    chatroom_id: &'a str,
}

#[derive(Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

impl HttpSummarizer {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, chatroom: &ChatroomId) -> Result<Option<String>, SummarizerError> {
        let response = self
            .client
            .post("/diary/summary")
            .json(&SummaryRequest {
                chatroom_id: chatroom.as_str(),
            })
            .send()
            .await
            .map_err(|e| SummarizerError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SummarizerError::RequestFailed(error_text(response).await));
        }

        let parsed: SummaryResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;
        Ok(parsed.summary)
    }
}
