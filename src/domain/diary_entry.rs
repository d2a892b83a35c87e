use std::fmt;

use chrono::{DateTime, Utc};

use super::Emotion;

/// Opaque diary entry identifier minted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiaryEntryId(String);

impl DiaryEntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiaryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted diary record, read back by the calendar view.
#[derive(Debug, Clone)]
pub struct DiaryEntry {
    pub id: DiaryEntryId,
    pub date: DateTime<Utc>,
    pub emotion: Emotion,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
}
