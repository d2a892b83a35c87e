mod auth_gateway;
mod chat_gateway;
mod client;
mod diary_store;
mod end_status_provider;
mod summarizer;

pub use auth_gateway::HttpAuthGateway;
pub use chat_gateway::HttpChatGateway;
pub use client::{ApiClient, ApiClientError, REQUEST_ID_HEADER};
pub use diary_store::HttpDiaryStore;
pub use end_status_provider::HttpEndStatusProvider;
pub use summarizer::HttpSummarizer;
