use async_trait::async_trait;

/// Token pair issued by the backend on login.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthGatewayError>;

    async fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthTokens, AuthGatewayError>;

    async fn logout(&self, access_token: &str) -> Result<(), AuthGatewayError>;

    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthGatewayError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
