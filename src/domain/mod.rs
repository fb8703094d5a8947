//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and request values
//! - `wire.rs`: Raw serde structs matching backend request bodies (where needed)
//! - `client.rs`: Sub-client with one method per REST resource

pub mod account;
pub mod market;
pub mod order;
pub mod user;
