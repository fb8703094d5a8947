//! Endpoint table: logical resource names mapped to REST URLs.
//!
//! The table is fixed once the client is built. Only the base host is
//! configurable; every resource path is relative to it.

use std::str::FromStr;

/// A named REST resource of the private API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    InvestmentProfile,
    Accounts,
    AchIavAuth,
    AchRelationships,
    AchTransfers,
    Applications,
    Dividends,
    Edocuments,
    Instruments,
    MarginUpgrade,
    Markets,
    Notifications,
    Orders,
    PasswordReset,
    Quotes,
    DocumentRequests,
    User,
    Watchlists,
}

impl Endpoint {
    pub const ALL: [Endpoint; 19] = [
        Endpoint::Login,
        Endpoint::InvestmentProfile,
        Endpoint::Accounts,
        Endpoint::AchIavAuth,
        Endpoint::AchRelationships,
        Endpoint::AchTransfers,
        Endpoint::Applications,
        Endpoint::Dividends,
        Endpoint::Edocuments,
        Endpoint::Instruments,
        Endpoint::MarginUpgrade,
        Endpoint::Markets,
        Endpoint::Notifications,
        Endpoint::Orders,
        Endpoint::PasswordReset,
        Endpoint::Quotes,
        Endpoint::DocumentRequests,
        Endpoint::User,
        Endpoint::Watchlists,
    ];

    /// Resource name as used in the endpoint table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::InvestmentProfile => "investment_profile",
            Self::Accounts => "accounts",
            Self::AchIavAuth => "ach_iav_auth",
            Self::AchRelationships => "ach_relationships",
            Self::AchTransfers => "ach_transfers",
            Self::Applications => "applications",
            Self::Dividends => "dividends",
            Self::Edocuments => "edocuments",
            Self::Instruments => "instruments",
            Self::MarginUpgrade => "margin_upgrade",
            Self::Markets => "markets",
            Self::Notifications => "notifications",
            Self::Orders => "orders",
            Self::PasswordReset => "password_reset",
            Self::Quotes => "quotes",
            Self::DocumentRequests => "document_requests",
            Self::User => "user",
            Self::Watchlists => "watchlists",
        }
    }

    /// Path relative to the API host. Always starts and ends with `/`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/api-token-auth/",
            Self::InvestmentProfile => "/user/investment_profile/",
            Self::Accounts => "/accounts/",
            Self::AchIavAuth => "/ach/iav/auth/",
            Self::AchRelationships => "/ach/relationships/",
            Self::AchTransfers => "/ach/transfers/",
            Self::Applications => "/applications/",
            Self::Dividends => "/dividends/",
            Self::Edocuments => "/documents/",
            Self::Instruments => "/instruments/",
            Self::MarginUpgrade => "/margin/upgrades/",
            Self::Markets => "/markets/",
            Self::Notifications => "/notifications/",
            Self::Orders => "/orders/",
            Self::PasswordReset => "/password_reset/request/",
            Self::Quotes => "/quotes/",
            Self::DocumentRequests => "/upload/document_requests/",
            Self::User => "/user/",
            Self::Watchlists => "/watchlists/",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a resource name is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown endpoint: {0}")]
pub struct UnknownEndpoint(pub String);

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownEndpoint(s.to_string()))
    }
}

/// Immutable resource → URL mapping rooted at one base host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource.
    pub fn resolve(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Full URL of a resource looked up by name (`"accounts"`, `"login"`, ...).
    pub fn resolve_name(&self, name: &str) -> Result<String, UnknownEndpoint> {
        Ok(self.resolve(name.parse()?))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(crate::network::DEFAULT_API_URL)
    }
}
