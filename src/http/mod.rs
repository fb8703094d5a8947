//! HTTP client layer: `RobinhoodHttp`, the transport every call goes through.

pub mod client;

pub use client::RobinhoodHttp;
