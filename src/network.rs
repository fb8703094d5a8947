//! Network constants for the Robinhood API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.robinhood.com";

/// Value sent in the `X-Robinhood-API-Version` header.
pub const API_VERSION: &str = "1.0.0";

/// Default `User-Agent`, matching the mobile client the private API expects.
pub const DEFAULT_USER_AGENT: &str = "Robinhood/823 (iPhone; iOS 7.1.2; Scale/2.00)";

/// Default `Accept-Language`.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en;q=1, fr;q=0.9, de;q=0.8, ja;q=0.7, nl;q=0.6, it;q=0.5";

/// Content type for every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
