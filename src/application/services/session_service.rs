use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::{AuthGateway, AuthGatewayError, AuthTokens};

/// Session state for one client instance. Authentication is derived from
/// token presence; tokens live only as long as the service.
pub struct SessionService<A>
where
    A: AuthGateway,
{
    gateway: Arc<A>,
    tokens: RwLock<Option<AuthTokens>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Gateway(#[from] AuthGatewayError),
}

impl<A> SessionService<A>
where
    A: AuthGateway,
{
    pub fn new(gateway: Arc<A>) -> Self {
        Self {
            gateway,
            tokens: RwLock::new(None),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.tokens.read().await.is_some()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .await
            .as_ref()
            .map(|tokens| tokens.access_token.clone())
    }

    /// Seeds the session from externally persisted tokens.
    pub async fn restore(&self, tokens: AuthTokens) {
        *self.tokens.write().await = Some(tokens);
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), SessionError> {
        self.gateway.signup(email, password, confirm_password).await?;
        Ok(())
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<(), SessionError> {
        let tokens = self.gateway.login(email, password, remember_me).await?;
        *self.tokens.write().await = Some(tokens);
        tracing::info!("Session established");
        Ok(())
    }

    /// Logs out at the gateway, then clears the local tokens. A gateway
    /// failure leaves the session intact, matching the backing product.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let access_token = self
            .access_token()
            .await
            .ok_or(SessionError::NotAuthenticated)?;
        self.gateway.logout(&access_token).await?;
        *self.tokens.write().await = None;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Swaps the access token in place using the stored refresh token.
    pub async fn refresh(&self) -> Result<(), SessionError> {
        let refresh_token = self
            .tokens
            .read()
            .await
            .as_ref()
            .map(|tokens| tokens.refresh_token.clone())
            .ok_or(SessionError::NotAuthenticated)?;
        let access_token = self.gateway.refresh(&refresh_token).await?;
        if let Some(tokens) = self.tokens.write().await.as_mut() {
            tokens.access_token = access_token;
        }
        Ok(())
    }
}
