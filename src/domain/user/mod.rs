//! User domain: profile, investment profile, notifications, applications.

#[cfg(feature = "http")]
pub mod client;
