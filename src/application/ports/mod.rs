mod auth_gateway;
mod chat_gateway;
mod diary_store;
mod end_status_provider;
mod summarizer;

pub use auth_gateway::{AuthGateway, AuthGatewayError, AuthTokens};
pub use chat_gateway::{ChatGateway, ChatGatewayError, ChatHistory};
pub use diary_store::{DiaryDraft, DiaryStore, DiaryStoreError};
pub use end_status_provider::{EndStatusError, EndStatusProvider};
pub use summarizer::{Summarizer, SummarizerError};
