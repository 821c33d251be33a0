// SPDX-License-Identifier: MPL-2.0
//! Authentication collaborator and session state.
//!
//! The overlay runtime only consumes [`AuthService`] as the asynchronous action
//! behind the auth dialog's submit. The real implementation talks to the
//! cookie-session backend; [`LocalAuthService`] keeps accounts in memory for
//! the demo shell and tests.
//!
//! The session is constructed once at startup and handed to whoever needs it;
//! there is no global lookup.

use crate::error::{self, AuthError};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// What the auth dialog submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Persist the session cookie beyond the browser session.
    pub remember: bool,
}

/// Backend contract for login/signup/logout/me.
///
/// Futures are `'static` so hosts can hand them to their runtime
/// (e.g. `iced::Task::perform`).
pub trait AuthService: Clone + Send + Sync + 'static {
    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthUser, AuthError>> + Send + 'static;

    fn signup(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthUser, AuthError>> + Send + 'static;

    fn logout(&self) -> impl Future<Output = Result<(), AuthError>> + Send + 'static;

    fn me(&self) -> impl Future<Output = Result<AuthUser, AuthError>> + Send + 'static;
}

#[derive(Debug, Default)]
struct Accounts {
    by_email: HashMap<String, (AuthUser, String)>,
    current: Option<AuthUser>,
}

/// In-memory [`AuthService`].
#[derive(Debug, Clone, Default)]
pub struct LocalAuthService {
    accounts: Arc<Mutex<Accounts>>,
}

impl LocalAuthService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

impl AuthService for LocalAuthService {
    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthUser, AuthError>> + Send + 'static {
        let accounts = Arc::clone(&self.accounts);
        async move {
            let mut accounts = accounts.lock().await;
            let email = Self::normalize(&credentials.email);
            let user = match accounts.by_email.get(&email) {
                Some((user, password)) if *password == credentials.password => user.clone(),
                _ => return Err(AuthError::InvalidCredentials),
            };
            accounts.current = Some(user.clone());
            Ok(user)
        }
    }

    fn signup(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthUser, AuthError>> + Send + 'static {
        let accounts = Arc::clone(&self.accounts);
        async move {
            let mut accounts = accounts.lock().await;
            let email = Self::normalize(&credentials.email);
            if accounts.by_email.contains_key(&email) {
                return Err(AuthError::EmailTaken(email));
            }
            let user = AuthUser {
                id: format!("u_{}", accounts.by_email.len() + 1),
                email: email.clone(),
            };
            accounts
                .by_email
                .insert(email, (user.clone(), credentials.password));
            accounts.current = Some(user.clone());
            Ok(user)
        }
    }

    fn logout(&self) -> impl Future<Output = Result<(), AuthError>> + Send + 'static {
        let accounts = Arc::clone(&self.accounts);
        async move {
            accounts
                .lock()
                .await
                .current
                .take()
                .map(|_| ())
                .ok_or(AuthError::NotAuthenticated)
        }
    }

    fn me(&self) -> impl Future<Output = Result<AuthUser, AuthError>> + Send + 'static {
        let accounts = Arc::clone(&self.accounts);
        async move {
            accounts
                .lock()
                .await
                .current
                .clone()
                .ok_or(AuthError::NotAuthenticated)
        }
    }
}

/// Who is signed in, as far as the client knows.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<AuthUser>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session that has not yet asked the backend who is signed in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Applies the answer to the initial `me` check. Failure means signed out.
    pub fn resolve(&mut self, result: Result<AuthUser, AuthError>) {
        self.user = result.ok();
        self.loading = false;
    }

    pub fn signed_in(&mut self, user: AuthUser) {
        log::info!("Signed in as {}", user.email);
        self.user = Some(user);
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// The signed-in user, for actions that need an authenticated session.
    pub fn require_user(&self) -> error::Result<&AuthUser> {
        self.user
            .as_ref()
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            remember: true,
        }
    }

    #[tokio::test]
    async fn signup_then_login_round_trip() {
        let service = LocalAuthService::new();
        let created = service
            .signup(credentials("Me@Example.com", "Abcdef1!"))
            .await
            .expect("signup succeeds");
        assert_eq!(created.email, "me@example.com");

        service.logout().await.expect("logout succeeds");
        assert_eq!(service.me().await, Err(AuthError::NotAuthenticated));

        let user = service
            .login(credentials("me@example.com", "Abcdef1!"))
            .await
            .expect("login succeeds");
        assert_eq!(user, created);
        assert_eq!(service.me().await, Ok(created));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let service = LocalAuthService::new();
        service
            .signup(credentials("me@example.com", "Abcdef1!"))
            .await
            .expect("signup succeeds");

        let result = service.login(credentials("me@example.com", "nope")).await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let service = LocalAuthService::new();
        service
            .signup(credentials("me@example.com", "Abcdef1!"))
            .await
            .expect("signup succeeds");

        let result = service.signup(credentials("ME@example.com", "Abcdef1!")).await;
        assert!(matches!(result, Err(AuthError::EmailTaken(_))));
    }

    #[test]
    fn session_resolves_initial_check() {
        let mut session = Session::new();
        assert!(session.is_loading());

        session.resolve(Err(AuthError::NotAuthenticated));
        assert!(!session.is_loading());
        assert!(session.user().is_none());

        session.signed_in(AuthUser {
            id: "u_1".into(),
            email: "me@example.com".into(),
        });
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u_1"));

        session.signed_out();
        assert!(session.user().is_none());
    }

    #[test]
    fn require_user_fails_when_signed_out() {
        let mut session = Session::new();
        session.resolve(Err(AuthError::NotAuthenticated));
        let err = session.require_user().expect_err("nobody signed in");
        assert!(matches!(
            err,
            error::Error::Auth(AuthError::NotAuthenticated)
        ));

        session.signed_in(AuthUser {
            id: "u_1".into(),
            email: "me@example.com".into(),
        });
        assert_eq!(
            session.require_user().map(|user| user.id.as_str()).ok(),
            Some("u_1")
        );
    }
}
