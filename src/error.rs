// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! Validation problems are never errors (they are plain optional messages on
//! the form state). Errors here cover configuration I/O and failures reported
//! by the authentication collaborator.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Auth Error: {0}")]
    Auth(#[from] AuthError),
}

/// Failures reported by an [`AuthService`](crate::session::AuthService).
///
/// The variants carry enough detail for logs. Dialogs never render them; a
/// failed submit always shows the same generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signup attempted with an email that already has an account.
    #[error("an account already exists for {0}")]
    EmailTaken(String),

    /// No active session (e.g. `me` or `logout` without login).
    #[error("not authenticated")]
    NotAuthenticated,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
