use chrono::{DateTime, Utc};

/// One user/bot exchange in a chatroom, ordered by send time.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub user_message: String,
    pub bot_response: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(user_message: String, bot_response: String) -> Self {
        Self {
            user_message,
            bot_response,
            created_at: Utc::now(),
        }
    }
}
