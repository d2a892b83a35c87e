use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub chat: ChatSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Access token attached to outbound requests. Token persistence is
    /// handled outside the client; the environment is the hand-off point.
    pub bearer_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    pub history_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api: ApiSettings {
                base_url: std::env::var("HARU_API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
                timeout_seconds: std::env::var("HARU_REQUEST_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
                bearer_token: std::env::var("HARU_ACCESS_TOKEN").ok(),
            },
            chat: ChatSettings {
                history_limit: std::env::var("HARU_HISTORY_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            },
            logging: LoggingSettings {
                level: std::env::var("HARU_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}
