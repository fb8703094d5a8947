//! Auth sub-client: the login exchange and readiness queries.

use crate::auth::{LoginRequest, LoginResponse, SessionState};
use crate::client::RobinhoodClient;
use crate::endpoints::Endpoint;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a RobinhoodClient,
}

impl<'a> Auth<'a> {
    /// Perform the login exchange and move the client to the ready state.
    ///
    /// On success the issued token and account identifier are stored and
    /// every later request carries `Authorization: Token <token>`.
    ///
    /// Any failure is final for this attempt: nothing is retried, and the
    /// session is left uninitialized so resource calls keep being rejected.
    /// Transport failures surface as [`SdkError::Http`]; a non-success status
    /// or a body without a token surfaces as [`AuthError::LoginFailed`].
    pub async fn login(&self) -> Result<(), SdkError> {
        let url = self.client.endpoints.resolve(Endpoint::Login);

        // One login at a time. The session is not locked across the request.
        let _login = self.client.login_lock.lock().await;

        let (credentials, headers) = {
            let session = self.client.session.read().await;
            (session.credentials().clone(), session.login_headers().clone())
        };

        let body = self
            .client
            .http
            .post_form::<serde_json::Value, _>(&url, &LoginRequest::from(&credentials), &headers)
            .await;

        let mut session = self.client.session.write().await;

        let body = match body {
            Ok(body) => body,
            Err(e) => {
                session.reset();
                tracing::warn!(error = %e, "Login request failed");
                return Err(login_error(e));
            }
        };

        let login: LoginResponse = match serde_json::from_value(body) {
            Ok(login) => login,
            Err(e) => {
                session.reset();
                tracing::warn!(error = %e, "Login response rejected");
                return Err(AuthError::LoginFailed(format!("malformed login response: {}", e)).into());
            }
        };

        if let Err(e) = session.authorize(login.token, login.account) {
            session.reset();
            tracing::warn!(error = %e, "Login response rejected");
            return Err(e.into());
        }

        tracing::info!(
            account = session.account().unwrap_or("<none>"),
            "Logged in"
        );
        Ok(())
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> SessionState {
        self.client.session.read().await.state()
    }

    /// Whether login has completed successfully.
    pub async fn is_ready(&self) -> bool {
        self.client.session.read().await.is_ready()
    }

    /// Account identifier from the login response.
    pub async fn account(&self) -> Option<String> {
        self.client
            .session
            .read()
            .await
            .account()
            .map(str::to_string)
    }
}

/// Transport failures pass through; a server refusal or an undecodable body
/// becomes `LoginFailed`.
fn login_error(e: HttpError) -> SdkError {
    match e {
        HttpError::Reqwest(ref r) if r.is_decode() => SdkError::Auth(AuthError::LoginFailed(
            format!("login response is not JSON: {}", r),
        )),
        HttpError::Reqwest(_) | HttpError::FormEncode(_) => SdkError::Http(e),
        other => SdkError::Auth(AuthError::LoginFailed(other.to_string())),
    }
}
