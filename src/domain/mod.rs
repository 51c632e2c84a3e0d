//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and helpers
//! - `wire.rs`: Shape of the raw decoded responses (where there is one)
//! - `client.rs`: Sub-client with the HTTP operations

pub mod message;
pub mod order;
