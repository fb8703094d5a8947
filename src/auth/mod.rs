//! Authentication: credentials, login wire types, session state.
//!
//! ## Lifecycle
//!
//! A client starts **uninitialized**. One login exchange
//! (`POST /api-token-auth/` with a form-encoded username and password) moves it
//! to **ready**: the returned token is stored in the [`Session`] and every
//! subsequent request carries `Authorization: Token <token>`.
//!
//! Resource calls made before login completes are rejected with
//! [`AuthError::NotReady`](crate::error::AuthError::NotReady). A failed login
//! leaves the client uninitialized.
//!
//! The token is held privately by the session and is never exposed through
//! the public API. Only the account identifier is readable.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub mod session;

#[cfg(feature = "http")]
pub use session::Session;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Environment variable holding the account username.
pub const USERNAME_ENV: &str = "ROBINHOOD_USERNAME";

/// Environment variable holding the account password.
pub const PASSWORD_ENV: &str = "ROBINHOOD_PASSWORD";

// ============================================================================
// Credentials
// ============================================================================

/// Username and password used for the login exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `ROBINHOOD_USERNAME` and `ROBINHOOD_PASSWORD`.
    pub fn from_env() -> Result<Self, AuthError> {
        let username =
            std::env::var(USERNAME_ENV).map_err(|_| AuthError::MissingCredential(USERNAME_ENV))?;
        let password =
            std::env::var(PASSWORD_ENV).map_err(|_| AuthError::MissingCredential(PASSWORD_ENV))?;
        Ok(Self { username, password })
    }

    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty() {
            return Err(AuthError::MissingCredential("username"));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingCredential("password"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Session state
// ============================================================================

/// The two lifecycle states of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Uninitialized => write!(f, "uninitialized"),
            SessionState::Ready => write!(f, "ready"),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Login form body.
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub password: &'a str,
    pub username: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            password: &credentials.password,
            username: &credentials.username,
        }
    }
}

/// Login response body.
#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub account: Option<String>,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("account", &self.account)
            .finish()
    }
}
