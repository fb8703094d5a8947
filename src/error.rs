//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Form encoding failed: {0}")]
    FormEncode(#[from] serde_urlencoded::ser::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },
}

impl HttpError {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::FormEncode(_) => None,
            Self::ServerError { status, .. } | Self::BadRequest { status, .. } => Some(*status),
            Self::RateLimited(_) => Some(429),
            Self::Unauthorized(_) => Some(401),
            Self::NotFound(_) => Some(404),
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A resource call was issued before login completed.
    #[error("Client not ready: login has not completed")]
    NotReady,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}
