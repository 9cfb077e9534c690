//! Login screen.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::error;
use zeroize::Zeroizing;

use crate::{
    auth::{AuthService, AuthServiceError, Credentials, Session},
    screens::ScreenError,
};

/// Result of pressing the login button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The credentials were accepted.
    LoggedIn(Session),

    /// A login was already in flight, so this press did nothing.
    Ignored,
}

pub struct LoginScreen {
    auth: Arc<dyn AuthService>,
    pub username: String,
    password: Zeroizing<String>,
    in_flight: AtomicBool,
}

impl LoginScreen {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            username: String::new(),
            password: Zeroizing::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Replace the typed password. The previous one is wiped.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Zeroizing::new(password.into());
    }

    /// Whether a login request is currently running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the typed credentials.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the login is refused or fails.
    pub async fn submit(&self) -> Result<LoginOutcome, ScreenError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(LoginOutcome::Ignored);
        }

        let _guard = InFlight(&self.in_flight);

        let credentials = Credentials::new(self.username.trim(), self.password.as_str());

        match self.auth.login(credentials).await {
            Ok(session) => Ok(LoginOutcome::LoggedIn(session)),
            Err(err) => {
                error!(error = %err, "login failed");

                Err(ScreenError::new(login_message(&err)))
            }
        }
    }
}

impl std::fmt::Debug for LoginScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginScreen")
            .field("username", &self.username)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

fn login_message(error: &AuthServiceError) -> &'static str {
    match error {
        AuthServiceError::UserNotFound => "User not found",
        AuthServiceError::InvalidPassword => "Incorrect password",
        AuthServiceError::Verification(_) => "Could not verify password",
        AuthServiceError::Backend(_) => "Could not log in",
    }
}

/// Clears the in-flight flag when the submit finishes, however it finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use jiff::Timestamp;
    use reqwest::StatusCode;
    use testresult::TestResult;
    use tokio::sync::Notify;

    use crate::{auth::MockAuthService, backend::BackendError};

    use super::*;

    fn session(username: &str) -> Session {
        Session {
            username: username.to_string(),
            logged_in_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn screen(auth: MockAuthService) -> LoginScreen {
        let mut screen = LoginScreen::new(Arc::new(auth));
        screen.username = " maria ".to_string();
        screen.set_password("s3cret");

        screen
    }

    #[tokio::test]
    async fn submit_logs_in_with_trimmed_username() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|credentials| {
                credentials.username == "maria" && credentials.password.as_str() == "s3cret"
            })
            .return_once(|_| Ok(session("maria")));

        let outcome = screen(auth).submit().await?;

        assert_eq!(outcome, LoginOutcome::LoggedIn(session("maria")));

        Ok(())
    }

    #[tokio::test]
    async fn errors_map_to_messages() {
        let cases: [(fn() -> AuthServiceError, &str); 4] = [
            (|| AuthServiceError::UserNotFound, "User not found"),
            (|| AuthServiceError::InvalidPassword, "Incorrect password"),
            (
                || {
                    AuthServiceError::Verification(BackendError::UnexpectedResponse(
                        StatusCode::BAD_GATEWAY,
                        String::new(),
                    ))
                },
                "Could not verify password",
            ),
            (
                || AuthServiceError::Backend(BackendError::InvalidCount(None)),
                "Could not log in",
            ),
        ];

        for (make_error, message) in cases {
            let mut auth = MockAuthService::new();
            auth.expect_login().once().return_once(move |_| Err(make_error()));

            let screen = screen(auth);
            let result = screen.submit().await;

            assert_eq!(result, Err(ScreenError::new(message)));
            assert!(!screen.is_loading());
        }
    }

    struct SlowAuth {
        release: Notify,
    }

    #[async_trait]
    impl AuthService for SlowAuth {
        async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
            self.release.notified().await;

            Ok(session(&credentials.username))
        }
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() -> TestResult {
        let auth = Arc::new(SlowAuth {
            release: Notify::new(),
        });

        let mut screen = LoginScreen::new(Arc::clone(&auth) as Arc<dyn AuthService>);
        screen.username = "maria".to_string();

        let first = screen.submit();
        tokio::pin!(first);

        // Poll the first submit until it is parked inside the service.
        assert!(poll_once(first.as_mut()).await.is_none());
        assert!(screen.is_loading());

        assert_eq!(screen.submit().await?, LoginOutcome::Ignored);

        auth.release.notify_one();

        assert_eq!(first.await?, LoginOutcome::LoggedIn(session("maria")));
        assert!(!screen.is_loading());

        Ok(())
    }

    async fn poll_once<F: std::future::Future + Unpin>(future: F) -> Option<F::Output> {
        let mut future = future;

        std::future::poll_fn(|cx| {
            std::task::Poll::Ready(match std::pin::Pin::new(&mut future).poll(cx) {
                std::task::Poll::Ready(output) => Some(output),
                std::task::Poll::Pending => None,
            })
        })
        .await
    }
}
