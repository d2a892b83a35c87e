mod calendar_service;
mod chat_service;
mod conversation_service;
mod diary_service;
mod session_service;

pub use calendar_service::{CalendarReport, CalendarService, RoomOutcome};
pub use chat_service::{ChatError, ChatService};
pub use conversation_service::{ConversationEndError, ConversationService, ConversationStage};
pub use diary_service::{DiaryService, DiaryView};
pub use session_service::{SessionError, SessionService};
