use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;

use crate::application::ports::{EndStatusError, EndStatusProvider};
use crate::domain::{ChatroomId, EmotionCalendar, RepresentativeEmotion};

/// Builds the calendar emotion view from per-chatroom end statuses.
///
/// The view is recomputed fully on every call; nothing is cached or
/// persisted.
pub struct CalendarService<P>
where
    P: EndStatusProvider,
{
    end_statuses: Arc<P>,
}

/// What became of one chatroom during an aggregation pass.
#[derive(Debug)]
pub enum RoomOutcome {
    Contributed {
        chatroom: ChatroomId,
        representation: RepresentativeEmotion,
    },
    SkippedNotEnded {
        chatroom: ChatroomId,
    },
    Failed {
        chatroom: ChatroomId,
        error: EndStatusError,
    },
}

#[derive(Debug)]
pub struct CalendarReport {
    pub calendar: EmotionCalendar,
    pub outcomes: Vec<RoomOutcome>,
}

impl CalendarReport {
    pub fn contributed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RoomOutcome::Contributed { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RoomOutcome::Failed { .. }))
            .count()
    }
}

impl<P> CalendarService<P>
where
    P: EndStatusProvider,
{
    pub fn new(end_statuses: Arc<P>) -> Self {
        Self { end_statuses }
    }

    /// Fetches every chatroom's end status concurrently and folds the
    /// settled results into an emotion calendar. A failing fetch excludes
    /// only that chatroom; the rest of the aggregation proceeds.
    pub async fn emotion_calendar(&self, chatrooms: &[ChatroomId]) -> CalendarReport {
        let fetches = chatrooms.iter().map(|chatroom| {
            let provider = Arc::clone(&self.end_statuses);
            async move {
                let status = provider.end_status(chatroom).await;
                (chatroom.clone(), status)
            }
        });
        let settled = join_all(fetches).await;

        let now = Utc::now();
        let mut calendar = EmotionCalendar::new();
        let mut outcomes = Vec::with_capacity(settled.len());

        for (chatroom, status) in settled {
            match status {
                Err(error) => {
                    tracing::warn!(
                        chatroom = %chatroom,
                        error = %error,
                        "End-status fetch failed; chatroom excluded from calendar"
                    );
                    outcomes.push(RoomOutcome::Failed { chatroom, error });
                }
                Ok(status) if !status.ended => {
                    outcomes.push(RoomOutcome::SkippedNotEnded { chatroom });
                }
                Ok(status) => {
                    let representation = status.representative(now);
                    calendar.add(representation.effective_at, representation.emotion);
                    outcomes.push(RoomOutcome::Contributed {
                        chatroom,
                        representation,
                    });
                }
            }
        }

        CalendarReport { calendar, outcomes }
    }
}
