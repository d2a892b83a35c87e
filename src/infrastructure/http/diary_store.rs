use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{DiaryDraft, DiaryStore, DiaryStoreError};
use crate::domain::{DiaryEntry, DiaryEntryId};

use super::client::{error_text, ApiClient};

pub struct HttpDiaryStore {
    client: ApiClient,
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    user_id: &'a str,
    content: &'a str,
    date: String,
    emotion: &'a str,
    summary: &'a str,
}

#[derive(Deserialize)]
struct SaveResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    diary_id: Option<String>,
}

#[derive(Deserialize)]
struct DiaryListItem {
    #[serde(rename = "_id")]
    id: String,
    date: DateTime<Utc>,
    emotion: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    summary: Option<String>,
}

impl HttpDiaryStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DiaryStore for HttpDiaryStore {
    async fn save(&self, draft: &DiaryDraft) -> Result<bool, DiaryStoreError> {
        let response = self
            .client
            .post("/diary/save")
            .json(&SaveRequest {
                user_id: draft.user_id.as_str(),
                content: &draft.content,
                date: draft.date.to_rfc3339(),
                emotion: draft.emotion.as_str(),
                summary: &draft.summary,
            })
            .send()
            .await
            .map_err(|e| DiaryStoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DiaryStoreError::RequestFailed(error_text(response).await));
        }

        let parsed: SaveResponse = response
            .json()
            .await
            .map_err(|e| DiaryStoreError::InvalidResponse(e.to_string()))?;
        Ok(parsed.success || parsed.diary_id.is_some())
    }

    async fn entries_on(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>, DiaryStoreError> {
        let response = self
            .client
            .get("/diary/list")
            .query(&[("date", date.format("%Y-%m-%d").to_string())])
            .send()
            .await
            .map_err(|e| DiaryStoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DiaryStoreError::RequestFailed(error_text(response).await));
        }

        let items: Vec<DiaryListItem> = response
            .json()
            .await
            .map_err(|e| DiaryStoreError::InvalidResponse(e.to_string()))?;

        items
            .into_iter()
            .map(|item| {
                let emotion = item
                    .emotion
                    .parse()
                    .map_err(DiaryStoreError::InvalidResponse)?;
                Ok(DiaryEntry {
                    id: DiaryEntryId::new(item.id),
                    date: item.date,
                    emotion,
                    title: item.title,
                    content: item.content,
                    summary: item.summary,
                })
            })
            .collect()
    }
}
