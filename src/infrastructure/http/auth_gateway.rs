use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthGateway, AuthGatewayError, AuthTokens};

use super::client::{error_text, ApiClient};

pub struct HttpAuthGateway {
    client: ApiClient,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    remember_me: bool,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    refresh_token: String,
}

#[derive(Serialize)]
struct LogoutRequest<'a> {
    access_token: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthGatewayError> {
        let response = self
            .client
            .post("/register")
            .json(&SignupRequest {
                email,
                password,
                confirm_password,
            })
            .send()
            .await
            .map_err(|e| AuthGatewayError::RequestFailed(e.to_string()))?;

        if response.status().is_client_error() {
            return Err(AuthGatewayError::Rejected(error_text(response).await));
        }
        if !response.status().is_success() {
            return Err(AuthGatewayError::RequestFailed(error_text(response).await));
        }
        Ok(())
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthTokens, AuthGatewayError> {
        let response = self
            .client
            .post("/login")
            .json(&LoginRequest {
                email,
                password,
                remember_me,
            })
            .send()
            .await
            .map_err(|e| AuthGatewayError::RequestFailed(e.to_string()))?;

        if response.status().is_client_error() {
            return Err(AuthGatewayError::Rejected(error_text(response).await));
        }
        if !response.status().is_success() {
            return Err(AuthGatewayError::RequestFailed(error_text(response).await));
        }

        let parsed: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthGatewayError::InvalidResponse(e.to_string()))?;

        Ok(AuthTokens {
            access_token: parsed.access_token,
            refresh_token: parsed.refresh_token,
        })
    }

    async fn logout(&self, access_token: &str) -> Result<(), AuthGatewayError> {
        let response = self
            .client
            .post("/logout")
            .json(&LogoutRequest { access_token })
            .send()
            .await
            .map_err(|e| AuthGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthGatewayError::RequestFailed(error_text(response).await));
        }
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthGatewayError> {
        let response = self
            .client
            .put("/token")
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(|e| AuthGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthGatewayError::RequestFailed(error_text(response).await));
        }

        let parsed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| AuthGatewayError::InvalidResponse(e.to_string()))?;
        Ok(parsed.access_token)
    }
}
