use haru::domain::Emotion;

#[test]
fn given_each_emotion_when_mapping_to_glyph_then_matches_calendar_icons() {
    assert_eq!(Emotion::Happy.glyph(), "😄");
    assert_eq!(Emotion::Sadness.glyph(), "😭");
    assert_eq!(Emotion::Angry.glyph(), "😡");
    assert_eq!(Emotion::Panic.glyph(), "😨");
    assert_eq!(Emotion::Neutral.glyph(), "😐");
}

#[test]
fn given_wire_names_when_parsing_then_round_trips() {
    let all = [
        Emotion::Happy,
        Emotion::Sadness,
        Emotion::Angry,
        Emotion::Panic,
        Emotion::Neutral,
    ];
    for emotion in all {
        assert_eq!(emotion.as_str().parse::<Emotion>().unwrap(), emotion);
    }
}

#[test]
fn given_neutral_emotion_when_serializing_then_uses_backend_default_label() {
    assert_eq!(Emotion::Neutral.as_str(), "default");
}

#[test]
fn given_unknown_label_when_parsing_then_rejects() {
    assert!("joyful".parse::<Emotion>().is_err());
}
