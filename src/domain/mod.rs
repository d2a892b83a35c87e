mod chat_message;
mod chatroom;
mod chatroom_id;
mod diary_entry;
mod emotion;
mod emotion_calendar;
mod emotion_event;
mod end_status;
mod user_id;

pub use chat_message::ChatMessage;
pub use chatroom::Chatroom;
pub use chatroom_id::ChatroomId;
pub use diary_entry::{DiaryEntry, DiaryEntryId};
pub use emotion::Emotion;
pub use emotion_calendar::{display_date, EmotionCalendar};
pub use emotion_event::EmotionEvent;
pub use end_status::{ConversationEndStatus, RepresentativeEmotion};
pub use user_id::UserId;
