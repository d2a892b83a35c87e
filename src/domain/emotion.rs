use std::fmt;
use std::str::FromStr;

/// Emotion labels reported by the conversation-analysis collaborator.
///
/// `Neutral` is the label the backend calls `default`: the emotion assigned
/// to a conversation that ended without any recorded emotion events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Sadness,
    Angry,
    Panic,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sadness => "sadness",
            Emotion::Angry => "angry",
            Emotion::Panic => "panic",
            Emotion::Neutral => "default",
        }
    }

    /// The glyph shown on the emotion calendar for this emotion.
    pub fn glyph(&self) -> &'static str {
        match self {
            Emotion::Happy => "😄",
            Emotion::Sadness => "😭",
            Emotion::Angry => "😡",
            Emotion::Panic => "😨",
            Emotion::Neutral => "😐",
        }
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Emotion::Happy),
            "sadness" => Ok(Emotion::Sadness),
            "angry" => Ok(Emotion::Angry),
            "panic" => Ok(Emotion::Panic),
            "default" => Ok(Emotion::Neutral),
            _ => Err(format!("Invalid emotion: {}", s)),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
