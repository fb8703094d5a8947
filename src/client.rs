//! High-level client: `RobinhoodClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session, and accessor methods.

use crate::auth::client::Auth;
use crate::auth::session::default_headers;
use crate::auth::{Credentials, Session, SessionState};
use crate::domain::account::client::Accounts;
use crate::domain::market::client::Market;
use crate::domain::order::client::Orders;
use crate::domain::user::client::User;
use crate::endpoints::{Endpoint, Endpoints};
use crate::error::{AuthError, SdkError};
use crate::http::RobinhoodHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

use async_lock::{Mutex, RwLock};
use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::market::client::Market as MarketClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::user::client::User as UserClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.accounts()`, `client.market()`, `client.orders()`, etc.
///
/// Cloning is cheap; clones share one session.
#[derive(Clone)]
pub struct RobinhoodClient {
    pub(crate) http: RobinhoodHttp,
    pub(crate) endpoints: Endpoints,
    pub(crate) session: Arc<RwLock<Session>>,
    pub(crate) login_lock: Arc<Mutex<()>>,
}

impl RobinhoodClient {
    pub fn builder() -> RobinhoodClientBuilder {
        RobinhoodClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn user(&self) -> User<'_> {
        User { client: self }
    }

    pub fn market(&self) -> Market<'_> {
        Market { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Session queries ──────────────────────────────────────────────────

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn state(&self) -> SessionState {
        self.auth().state().await
    }

    pub async fn is_ready(&self) -> bool {
        self.auth().is_ready().await
    }

    pub async fn account(&self) -> Option<String> {
        self.auth().account().await
    }

    /// Authenticated GET against any entry of the endpoint table.
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<serde_json::Value, SdkError> {
        let url = self.endpoints.resolve(endpoint);
        self.get_authorized(&url).await
    }

    /// GET with the session's current headers. Rejected until login completes.
    pub(crate) async fn get_authorized(&self, url: &str) -> Result<serde_json::Value, SdkError> {
        let headers = self.authorized_headers().await?;
        Ok(self.http.get(url, &headers).await?)
    }

    /// Authorized headers and account identifier, read under one session guard.
    pub(crate) async fn authorized_context(
        &self,
    ) -> Result<(HeaderMap, Option<String>), AuthError> {
        let session = self.session.read().await;
        match session.authorized_headers() {
            Ok(headers) => Ok((headers.clone(), session.account().map(str::to_string))),
            Err(e) => {
                tracing::warn!("Rejecting call issued before login completed");
                Err(e)
            }
        }
    }

    async fn authorized_headers(&self) -> Result<HeaderMap, AuthError> {
        self.authorized_context().await.map(|(headers, _)| headers)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RobinhoodClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    user_agent: String,
    headers: Vec<(String, String)>,
}

impl Default for RobinhoodClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
    }
}

impl RobinhoodClientBuilder {
    /// Override the API host. Every endpoint path is resolved against it.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Shorthand for `credentials(Credentials::new(username, password))`.
    pub fn login(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials(Credentials::new(username, password))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Add a header to every request. Replaces a default of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build an uninitialized client. Call `client.auth().login()` before
    /// issuing resource calls.
    pub fn build(self) -> Result<RobinhoodClient, SdkError> {
        let credentials = self
            .credentials
            .ok_or(AuthError::MissingCredential("credentials"))?;
        credentials.validate()?;

        let headers = default_headers(&self.user_agent, &self.headers)?;

        Ok(RobinhoodClient {
            http: RobinhoodHttp::new(self.timeout)?,
            endpoints: Endpoints::new(&self.base_url),
            session: Arc::new(RwLock::new(Session::new(credentials, headers))),
            login_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Build the client and perform the login exchange.
    ///
    /// Returns only a ready client; a failed login fails the whole call.
    pub async fn connect(self) -> Result<RobinhoodClient, SdkError> {
        let client = self.build()?;
        client.auth().login().await?;
        Ok(client)
    }
}
