use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use haru::application::ports::{EndStatusError, EndStatusProvider};
use haru::application::services::{CalendarService, RoomOutcome};
use haru::domain::{ChatroomId, ConversationEndStatus, Emotion, EmotionEvent};

fn instant(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Answers from a fixed map; unknown chatrooms fail their fetch.
struct MockEndStatusProvider {
    statuses: HashMap<String, ConversationEndStatus>,
}

impl MockEndStatusProvider {
    fn new(statuses: &[(&str, ConversationEndStatus)]) -> Arc<Self> {
        Arc::new(Self {
            statuses: statuses
                .iter()
                .map(|(id, status)| ((*id).to_string(), status.clone()))
                .collect(),
        })
    }
}

#[async_trait::async_trait]
impl EndStatusProvider for MockEndStatusProvider {
    async fn end_status(
        &self,
        chatroom: &ChatroomId,
    ) -> Result<ConversationEndStatus, EndStatusError> {
        self.statuses
            .get(chatroom.as_str())
            .cloned()
            .ok_or_else(|| EndStatusError::RequestFailed("connection refused".to_string()))
    }
}

fn ended_with(emotion: Emotion, end: &str) -> ConversationEndStatus {
    ConversationEndStatus {
        ended: true,
        end_timestamp: Some(instant(end)),
        emotions: vec![EmotionEvent::new(emotion, instant(end))],
    }
}

fn rooms(ids: &[&str]) -> Vec<ChatroomId> {
    ids.iter().map(|id| ChatroomId::new(*id)).collect()
}

#[tokio::test]
async fn given_one_failing_fetch_when_aggregating_then_other_rooms_still_contribute() {
    let provider = MockEndStatusProvider::new(&[
        ("room-a", ended_with(Emotion::Happy, "2024-05-02T03:00:00Z")),
        ("room-c", ended_with(Emotion::Sadness, "2024-05-02T04:00:00Z")),
    ]);
    let service = CalendarService::new(provider);

    let report = service
        .emotion_calendar(&rooms(&["room-a", "room-b", "room-c"]))
        .await;

    assert_eq!(report.contributed(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.calendar.glyphs_on(date(2024, 5, 2)), ["😄", "😭"]);
    assert!(report.outcomes.iter().any(|outcome| matches!(
        outcome,
        RoomOutcome::Failed { chatroom, .. } if chatroom.as_str() == "room-b"
    )));
}

#[tokio::test]
async fn given_room_not_ended_when_aggregating_then_contributes_no_glyph() {
    let status = ConversationEndStatus {
        ended: false,
        end_timestamp: None,
        emotions: vec![EmotionEvent::new(
            Emotion::Happy,
            instant("2024-05-02T03:00:00Z"),
        )],
    };
    let service = CalendarService::new(MockEndStatusProvider::new(&[("room-a", status)]));

    let report = service.emotion_calendar(&rooms(&["room-a"])).await;

    assert!(report.calendar.is_empty());
    assert!(matches!(
        report.outcomes[0],
        RoomOutcome::SkippedNotEnded { .. }
    ));
}

#[tokio::test]
async fn given_ended_room_without_events_when_aggregating_then_neutral_glyph_on_end_date() {
    let status = ConversationEndStatus {
        ended: true,
        end_timestamp: Some(instant("2024-05-02T03:00:00Z")),
        emotions: vec![],
    };
    let service = CalendarService::new(MockEndStatusProvider::new(&[("room-a", status)]));

    let report = service.emotion_calendar(&rooms(&["room-a"])).await;

    assert_eq!(report.calendar.glyphs_on(date(2024, 5, 2)), ["😐"]);
}

#[tokio::test]
async fn given_rooms_ending_across_seoul_midnight_when_aggregating_then_separate_dates() {
    let provider = MockEndStatusProvider::new(&[
        ("room-a", ended_with(Emotion::Happy, "2024-05-01T14:50:00Z")),
        ("room-b", ended_with(Emotion::Panic, "2024-05-01T15:10:00Z")),
    ]);
    let service = CalendarService::new(provider);

    let report = service.emotion_calendar(&rooms(&["room-a", "room-b"])).await;

    assert_eq!(report.calendar.glyphs_on(date(2024, 5, 1)), ["😄"]);
    assert_eq!(report.calendar.glyphs_on(date(2024, 5, 2)), ["😨"]);
}

#[tokio::test]
async fn given_no_chatrooms_when_aggregating_then_empty_report() {
    let service = CalendarService::new(MockEndStatusProvider::new(&[]));

    let report = service.emotion_calendar(&[]).await;

    assert!(report.calendar.is_empty());
    assert!(report.outcomes.is_empty());
}
