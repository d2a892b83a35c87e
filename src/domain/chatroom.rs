use chrono::{DateTime, Utc};

use super::ChatroomId;

/// One row of a user's chat history listing.
#[derive(Debug, Clone)]
pub struct Chatroom {
    pub id: ChatroomId,
    pub opened_at: Option<DateTime<Utc>>,
}
