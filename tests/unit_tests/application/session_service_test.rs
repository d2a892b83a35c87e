use std::sync::Arc;

use haru::application::ports::{AuthGateway, AuthGatewayError, AuthTokens};
use haru::application::services::{SessionError, SessionService};

struct MockAuthGateway {
    fail_logout: bool,
}

#[async_trait::async_trait]
impl AuthGateway for MockAuthGateway {
    async fn signup(
        &self,
        _email: &str,
        _password: &str,
        _confirm_password: &str,
    ) -> Result<(), AuthGatewayError> {
        Ok(())
    }

    async fn login(
        &self,
        _email: &str,
        _password: &str,
        _remember_me: bool,
    ) -> Result<AuthTokens, AuthGatewayError> {
        Ok(AuthTokens {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
        })
    }

    async fn logout(&self, _access_token: &str) -> Result<(), AuthGatewayError> {
        if self.fail_logout {
            Err(AuthGatewayError::RequestFailed("boom".to_string()))
        } else {
            Ok(())
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<String, AuthGatewayError> {
        Ok("access-2".to_string())
    }
}

fn service(fail_logout: bool) -> SessionService<MockAuthGateway> {
    SessionService::new(Arc::new(MockAuthGateway { fail_logout }))
}

#[tokio::test]
async fn given_successful_login_when_checking_session_then_authenticated() {
    let session = service(false);
    assert!(!session.is_authenticated().await);

    session.login("a@example.com", "pw", false).await.unwrap();

    assert!(session.is_authenticated().await);
    assert_eq!(session.access_token().await.as_deref(), Some("access-1"));
}

#[tokio::test]
async fn given_logout_success_when_checking_session_then_tokens_cleared() {
    let session = service(false);
    session.login("a@example.com", "pw", false).await.unwrap();

    session.logout().await.unwrap();

    assert!(!session.is_authenticated().await);
    assert!(session.access_token().await.is_none());
}

#[tokio::test]
async fn given_logout_failure_when_checking_session_then_session_is_kept() {
    let session = service(true);
    session.login("a@example.com", "pw", false).await.unwrap();

    let result = session.logout().await;

    assert!(matches!(result, Err(SessionError::Gateway(_))));
    assert!(session.is_authenticated().await);
}

#[tokio::test]
async fn given_no_session_when_logging_out_then_precondition_error() {
    let session = service(false);

    assert!(matches!(
        session.logout().await,
        Err(SessionError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn given_refresh_when_checking_session_then_access_token_is_replaced() {
    let session = service(false);
    session.login("a@example.com", "pw", true).await.unwrap();

    session.refresh().await.unwrap();

    assert_eq!(session.access_token().await.as_deref(), Some("access-2"));
}

#[tokio::test]
async fn given_restored_tokens_when_checking_session_then_authenticated() {
    let session = service(false);
    session
        .restore(AuthTokens {
            access_token: "stored-access".to_string(),
            refresh_token: "stored-refresh".to_string(),
        })
        .await;

    assert!(session.is_authenticated().await);
    assert_eq!(
        session.access_token().await.as_deref(),
        Some("stored-access")
    );
}
