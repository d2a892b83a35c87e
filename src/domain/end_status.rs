use chrono::{DateTime, Utc};

use super::{Emotion, EmotionEvent};

/// Snapshot of a chatroom's conclusion as reported by the
/// conversation-analysis collaborator. Immutable once produced.
#[derive(Debug, Clone)]
pub struct ConversationEndStatus {
    pub ended: bool,
    pub end_timestamp: Option<DateTime<Utc>>,
    pub emotions: Vec<EmotionEvent>,
}

/// The single emotion chosen to summarize a chatroom on the calendar,
/// anchored to the instant the chatroom is considered to have ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepresentativeEmotion {
    pub emotion: Emotion,
    pub effective_at: DateTime<Utc>,
}

impl ConversationEndStatus {
    /// Resolves the representative emotion for this chatroom.
    ///
    /// The representative is the mode of the recorded events; a tie breaks
    /// to the emotion whose first occurrence is earliest. The effective
    /// instant is the reported end timestamp when present, otherwise the
    /// latest event timestamp. A chatroom that ended without any recorded
    /// events resolves to `Emotion::Neutral` anchored at `now`.
    pub fn representative(&self, now: DateTime<Utc>) -> RepresentativeEmotion {
        if self.emotions.is_empty() {
            return RepresentativeEmotion {
                emotion: Emotion::Neutral,
                effective_at: self.end_timestamp.unwrap_or(now),
            };
        }

        // Counts keep first-seen order so a strict `>` comparison below
        // reproduces the first-occurrence tie-break.
        let mut counts: Vec<(Emotion, u32)> = Vec::new();
        let mut latest = self.emotions[0].timestamp;
        for event in &self.emotions {
            match counts.iter_mut().find(|(emotion, _)| *emotion == event.emotion) {
                Some((_, count)) => *count += 1,
                None => counts.push((event.emotion, 1)),
            }
            if event.timestamp > latest {
                latest = event.timestamp;
            }
        }

        let mut representative = counts[0].0;
        let mut max_count = 0;
        for (emotion, count) in &counts {
            if *count > max_count {
                max_count = *count;
                representative = *emotion;
            }
        }

        RepresentativeEmotion {
            emotion: representative,
            effective_at: self.end_timestamp.unwrap_or(latest),
        }
    }
}
