use chrono::{DateTime, Utc};

use super::Emotion;

/// A single emotion observation recorded during a conversation.
#[derive(Debug, Clone, Copy)]
pub struct EmotionEvent {
    pub emotion: Emotion,
    pub timestamp: DateTime<Utc>,
}

impl EmotionEvent {
    pub fn new(emotion: Emotion, timestamp: DateTime<Utc>) -> Self {
        Self { emotion, timestamp }
    }
}
