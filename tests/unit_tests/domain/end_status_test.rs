use chrono::{DateTime, TimeZone, Utc};
use haru::domain::{ConversationEndStatus, Emotion, EmotionEvent};

fn at(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_714_000_000 + offset_secs, 0).unwrap()
}

fn status(
    end_timestamp: Option<DateTime<Utc>>,
    emotions: &[(Emotion, i64)],
) -> ConversationEndStatus {
    ConversationEndStatus {
        ended: true,
        end_timestamp,
        emotions: emotions
            .iter()
            .map(|(emotion, secs)| EmotionEvent::new(*emotion, at(*secs)))
            .collect(),
    }
}

#[test]
fn given_majority_emotion_when_resolving_then_majority_wins_for_every_permutation() {
    let permutations = [
        [Emotion::Happy, Emotion::Happy, Emotion::Sadness],
        [Emotion::Happy, Emotion::Sadness, Emotion::Happy],
        [Emotion::Sadness, Emotion::Happy, Emotion::Happy],
    ];

    for events in permutations {
        let events: Vec<(Emotion, i64)> = events
            .iter()
            .enumerate()
            .map(|(i, emotion)| (*emotion, i as i64))
            .collect();
        let resolved = status(None, &events).representative(at(0));
        assert_eq!(resolved.emotion, Emotion::Happy);
    }
}

#[test]
fn given_tied_emotions_when_resolving_then_first_seen_wins() {
    let resolved = status(None, &[(Emotion::Happy, 0), (Emotion::Sadness, 1)]).representative(at(0));
    assert_eq!(resolved.emotion, Emotion::Happy);

    let resolved = status(None, &[(Emotion::Sadness, 0), (Emotion::Happy, 1)]).representative(at(0));
    assert_eq!(resolved.emotion, Emotion::Sadness);
}

#[test]
fn given_no_events_when_resolving_then_neutral_anchored_at_end_timestamp() {
    let resolved = status(Some(at(500)), &[]).representative(at(9_999));
    assert_eq!(resolved.emotion, Emotion::Neutral);
    assert_eq!(resolved.effective_at, at(500));
}

#[test]
fn given_no_events_and_no_end_timestamp_when_resolving_then_anchored_at_now() {
    let now = at(1_234);
    let resolved = status(None, &[]).representative(now);
    assert_eq!(resolved.emotion, Emotion::Neutral);
    assert_eq!(resolved.effective_at, now);
}

#[test]
fn given_end_timestamp_when_resolving_then_it_wins_over_latest_event() {
    let resolved = status(
        Some(at(900)),
        &[(Emotion::Angry, 100), (Emotion::Angry, 300)],
    )
    .representative(at(0));
    assert_eq!(resolved.effective_at, at(900));
}

#[test]
fn given_no_end_timestamp_when_resolving_then_latest_event_timestamp_is_used() {
    // Events arrive out of order; the latest timestamp still anchors.
    let resolved = status(
        None,
        &[
            (Emotion::Panic, 300),
            (Emotion::Panic, 700),
            (Emotion::Panic, 100),
        ],
    )
    .representative(at(0));
    assert_eq!(resolved.effective_at, at(700));
}
