//! Account domain: brokerage accounts, dividends, bank transfers, documents.
//!
//! Responses are returned as raw JSON; the SDK does not interpret them.

#[cfg(feature = "http")]
pub mod client;
