//! # Robinhood SDK
//!
//! An async Rust client for the Robinhood private REST API: session login,
//! account data, quotes and order placement.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Endpoint table, shared newtypes, order builder (no I/O)
//! 2. **Auth**: Credentials, login wire types, the session and its headers
//! 3. **HTTP**: `RobinhoodHttp`, one request per call, no retries
//! 4. **High-Level Client**: `RobinhoodClient` with nested sub-clients
//!
//! A client has two states, uninitialized and ready. Login moves it to ready;
//! every resource call before that is rejected.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use robinhood_sdk::prelude::*;
//!
//! let client = RobinhoodClient::builder()
//!     .login("user@example.com", "password")
//!     .connect()
//!     .await?;
//!
//! let accounts = client.accounts().list().await?;
//! let search = client.market().instruments("aapl").await?;
//! let instrument: InstrumentRef = serde_json::from_value(search["results"][0].clone())?;
//!
//! let order = OrderOptions::new(instrument, Decimal::new(15025, 2), Decimal::ONE);
//! client.orders().place_buy_order(&order).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): request types, wire types, sub-clients.
pub mod domain;

/// Resource name → URL table.
pub mod endpoints;

/// Unified SDK error types.
pub mod error;

/// Network constants: default host, headers, timeout.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, login, session state.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport wrapper.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `RobinhoodClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Side, Symbol};

    // Endpoint table
    pub use crate::endpoints::{Endpoint, Endpoints};

    // Orders
    pub use crate::domain::order::{
        build_order, InstrumentRef, OrderForm, OrderOptions, OrderType, TimeInForce, Trigger,
    };

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Price and quantity type
    pub use rust_decimal::Decimal;

    // Auth
    pub use crate::auth::{Credentials, SessionState};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountsClient, AuthClient, MarketClient, OrdersClient, RobinhoodClient,
        RobinhoodClientBuilder, UserClient,
    };
}
