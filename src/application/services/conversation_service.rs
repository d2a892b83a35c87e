use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{
    DiaryDraft, DiaryStore, DiaryStoreError, Summarizer, SummarizerError,
};
use crate::domain::{ChatroomId, Emotion, UserId};

/// Lifecycle of a chatroom's end-of-conversation workflow.
///
/// `Failed` is reachable from `Ended` (no summary) and from `Summarized`
/// (save rejected); there is no retry and no compensating transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationStage {
    #[default]
    Active,
    Ended,
    Summarized,
    Saved,
    Failed,
}

#[derive(Default)]
struct ConversationRecord {
    stage: ConversationStage,
    summary: Option<String>,
}

/// Orchestrates conversation termination: flips the ended flag, requests a
/// summary, and persists a diary entry built from it.
pub struct ConversationService<S, D>
where
    S: Summarizer,
    D: DiaryStore,
{
    summarizer: Arc<S>,
    diary_store: Arc<D>,
    records: RwLock<HashMap<ChatroomId, ConversationRecord>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationEndError {
    #[error("no summary text for chatroom {0}")]
    SummaryMissing(ChatroomId),
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizerError),
    #[error("diary save unacknowledged for chatroom {0}")]
    SaveUnacknowledged(ChatroomId),
    #[error("diary save: {0}")]
    Save(#[from] DiaryStoreError),
}

impl<S, D> ConversationService<S, D>
where
    S: Summarizer,
    D: DiaryStore,
{
    pub fn new(summarizer: Arc<S>, diary_store: Arc<D>) -> Self {
        Self {
            summarizer,
            diary_store,
            records: RwLock::new(HashMap::new()),
        }
    }

    pub async fn stage(&self, chatroom: &ChatroomId) -> ConversationStage {
        self.records
            .read()
            .await
            .get(chatroom)
            .map(|record| record.stage)
            .unwrap_or_default()
    }

    /// The summary held in memory for a chatroom. Remains readable even
    /// when the diary save afterwards failed.
    pub async fn summary(&self, chatroom: &ChatroomId) -> Option<String> {
        self.records
            .read()
            .await
            .get(chatroom)
            .and_then(|record| record.summary.clone())
    }

    /// Flips the ended flag without running the diary workflow.
    pub async fn mark_ended(&self, chatroom: &ChatroomId) {
        self.set_stage(chatroom, ConversationStage::Ended).await;
    }

    /// Runs the full termination workflow:
    /// `Active -> Ended -> Summarized -> Saved`, or `Failed` on the first
    /// step that errors. The ended flag flips before any collaborator is
    /// called.
    pub async fn end_conversation(
        &self,
        chatroom: &ChatroomId,
        user: &UserId,
        emotion: Emotion,
    ) -> Result<(), ConversationEndError> {
        self.set_stage(chatroom, ConversationStage::Ended).await;

        let summary = match self.summarizer.summarize(chatroom).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::error!(chatroom = %chatroom, "Summarizer returned no summary text");
                self.set_stage(chatroom, ConversationStage::Failed).await;
                return Err(ConversationEndError::SummaryMissing(chatroom.clone()));
            }
            Err(error) => {
                tracing::error!(chatroom = %chatroom, error = %error, "Summarization failed");
                self.set_stage(chatroom, ConversationStage::Failed).await;
                return Err(error.into());
            }
        };

        {
            let mut records = self.records.write().await;
            let record = records.entry(chatroom.clone()).or_default();
            record.summary = Some(summary.clone());
            record.stage = ConversationStage::Summarized;
        }

        let draft = DiaryDraft {
            user_id: user.clone(),
            content: summary.clone(),
            date: Utc::now(),
            emotion,
            summary,
        };

        match self.diary_store.save(&draft).await {
            Ok(true) => {
                tracing::info!(chatroom = %chatroom, "Conversation summarized and diary saved");
                self.set_stage(chatroom, ConversationStage::Saved).await;
                Ok(())
            }
            Ok(false) => {
                tracing::error!(chatroom = %chatroom, "Diary save reported no success");
                self.set_stage(chatroom, ConversationStage::Failed).await;
                Err(ConversationEndError::SaveUnacknowledged(chatroom.clone()))
            }
            Err(error) => {
                tracing::error!(chatroom = %chatroom, error = %error, "Diary save failed");
                self.set_stage(chatroom, ConversationStage::Failed).await;
                Err(error.into())
            }
        }
    }

    async fn set_stage(&self, chatroom: &ChatroomId, stage: ConversationStage) {
        let mut records = self.records.write().await;
        records.entry(chatroom.clone()).or_default().stage = stage;
    }
}
