//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    auth::{AuthServiceError, Credentials, Session},
    backend::{BackendClient, BackendError},
};

#[derive(Debug, Clone)]
pub struct RestAuthService {
    backend: BackendClient,
}

impl RestAuthService {
    #[must_use]
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl AuthService for RestAuthService {
    #[tracing::instrument(
        name = "auth.service.login",
        skip(self, credentials),
        fields(username = %credentials.username),
        err
    )]
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        let user = match self.backend.find_user(&credentials.username).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthServiceError::UserNotFound),
            // A rejected lookup reads as an unknown user; only transport failures surface.
            Err(BackendError::Http(error)) => return Err(BackendError::Http(error).into()),
            Err(error) => {
                warn!(%error, "user lookup failed");

                return Err(AuthServiceError::UserNotFound);
            }
        };

        let valid = self
            .backend
            .verify_password(&user.username, &credentials.password)
            .await
            .map_err(AuthServiceError::Verification)?;

        if !valid {
            return Err(AuthServiceError::InvalidPassword);
        }

        info!("user logged in");

        Ok(Session {
            username: user.username,
            logged_in_at: Timestamp::now(),
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Checks the credentials and opens a session.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError>;
}
