//! Dependency Inversion: login flows depend on an abstraction.
//!
//! [`LoginService`] is the high-level module. It never names a concrete
//! authentication strategy; it holds a `Box<dyn Authenticator>` injected at
//! construction, so the strategies ([`BasicAuth`], [`OAuth`], [`GoogleAuth`])
//! and the service can change independently. Tests inject a recording
//! strategy through the same seam.

pub mod error;

pub use error::*;

use async_trait::async_trait;
use tracing::{info, instrument};

/// One interchangeable way of authenticating a user.
///
/// The trait is async because real strategies talk to a directory or an
/// identity provider; the demos resolve immediately.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

fn check_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials(username.to_string()));
    }
    Ok(())
}

/// Username/password check against a local credential store.
pub struct BasicAuth;

#[async_trait]
impl Authenticator for BasicAuth {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        check_credentials(username, password)?;
        info!(%username, "BasicAuth: authenticating user");
        Ok(())
    }
}

/// Token exchange with a generic OAuth provider.
pub struct OAuth;

#[async_trait]
impl Authenticator for OAuth {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        check_credentials(username, password)?;
        info!(%username, "OAuth: authenticating user");
        Ok(())
    }
}

/// Sign-in federated through Google.
pub struct GoogleAuth;

#[async_trait]
impl Authenticator for GoogleAuth {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        check_credentials(username, password)?;
        info!(%username, "GoogleAuth: authenticating user");
        Ok(())
    }
}

/// High-level login flow.
///
/// Depends only on the [`Authenticator`] abstraction; which strategy runs is
/// decided by whoever constructs the service.
pub struct LoginService {
    authenticator: Box<dyn Authenticator>,
}

impl LoginService {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    /// Runs the injected strategy and reports the outcome.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.authenticator.authenticate(username, password).await?;
        info!(%username, "Login succeeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_password_is_rejected() {
        let result = BasicAuth.authenticate("user123", "").await;
        assert_eq!(
            result,
            Err(AuthError::InvalidCredentials("user123".to_string()))
        );
    }

    #[tokio::test]
    async fn every_strategy_accepts_well_formed_credentials() {
        let strategies: Vec<Box<dyn Authenticator>> =
            vec![Box::new(BasicAuth), Box::new(OAuth), Box::new(GoogleAuth)];
        for strategy in strategies {
            let service = LoginService::new(strategy);
            assert!(service.login("user123", "password123").await.is_ok());
        }
    }
}
