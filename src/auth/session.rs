//! Session: credentials, the issued token, the account id and the header set.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE,
    USER_AGENT,
};

use crate::auth::{Credentials, SessionState};
use crate::error::AuthError;
use crate::network::{API_VERSION, DEFAULT_ACCEPT_LANGUAGE, FORM_CONTENT_TYPE};

/// Name of the API version header.
pub const API_VERSION_HEADER: &str = "x-robinhood-api-version";

/// Build the unauthenticated header set sent with every request.
///
/// `extra` entries are applied last and replace defaults with the same name.
pub fn default_headers(
    user_agent: &str,
    extra: &[(String, String)],
) -> Result<HeaderMap, AuthError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    headers.insert(
        HeaderName::from_static(API_VERSION_HEADER),
        HeaderValue::from_static(API_VERSION),
    );
    headers.insert(USER_AGENT, header_value("User-Agent", user_agent)?);

    for (name, value) in extra {
        let header_name =
            HeaderName::try_from(name.as_str()).map_err(|e| AuthError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        headers.insert(header_name, header_value(name, value)?);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(value).map_err(|e| AuthError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Authenticated context shared by every call of one client.
///
/// Written by the login exchange, read by every resource call.
pub struct Session {
    credentials: Credentials,
    auth_token: Option<String>,
    account: Option<String>,
    base_headers: HeaderMap,
    headers: HeaderMap,
}

impl Session {
    pub(crate) fn new(credentials: Credentials, base_headers: HeaderMap) -> Self {
        Self {
            credentials,
            auth_token: None,
            account: None,
            headers: base_headers.clone(),
            base_headers,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.auth_token.is_some() {
            SessionState::Ready
        } else {
            SessionState::Uninitialized
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state().is_ready()
    }

    /// Account identifier returned by login, if the server sent one.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Headers for the login exchange itself (never carries a token).
    pub(crate) fn login_headers(&self) -> &HeaderMap {
        &self.base_headers
    }

    /// Headers for resource calls. Fails until login has completed.
    pub(crate) fn authorized_headers(&self) -> Result<&HeaderMap, AuthError> {
        if self.is_ready() {
            Ok(&self.headers)
        } else {
            Err(AuthError::NotReady)
        }
    }

    /// Store a freshly issued token and rebuild the header set around it.
    pub(crate) fn authorize(
        &mut self,
        token: String,
        account: Option<String>,
    ) -> Result<(), AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::LoginFailed("login response carried an empty token".to_string()));
        }
        let value = HeaderValue::from_str(&format!("Token {}", token)).map_err(|e| {
            AuthError::LoginFailed(format!("token is not a valid header value: {}", e))
        })?;

        let mut headers = self.base_headers.clone();
        headers.insert(AUTHORIZATION, value);

        self.headers = headers;
        self.auth_token = Some(token);
        self.account = account;
        Ok(())
    }

    /// Drop the token and account; the session returns to uninitialized.
    pub(crate) fn reset(&mut self) {
        self.auth_token = None;
        self.account = None;
        self.headers = self.base_headers.clone();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("credentials", &self.credentials)
            .field("state", &self.state())
            .field("account", &self.account)
            .finish()
    }
}
