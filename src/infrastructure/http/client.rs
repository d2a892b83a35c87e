use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::Deserialize;
use uuid::Uuid;

use crate::presentation::config::ApiSettings;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared HTTP client for the backend. Attaches the bearer token (when
/// configured) as a default header and stamps every request with a fresh
/// request id for log correlation.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("invalid bearer token")]
    InvalidBearerToken,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &settings.bearer_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiClientError::InvalidBearerToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::PUT, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Renders a non-success response as `HTTP <status>: <detail>`, preferring
/// the backend's JSON error field over the raw body.
pub(crate) async fn error_text(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or(body);
    format!("HTTP {}: {}", status, detail)
}
