//! # Tradebyte SDK
//!
//! An async Rust client for the Tradebyte order-management REST API, which
//! speaks XML over HTTP with Basic authentication.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Configuration, network constants, errors, XML codec
//! 2. **HTTP**: `TradebyteHttp`, the account-scoped request executor
//! 3. **Domain**: Orders and messages sub-clients
//! 4. **High-Level Client**: `TradebyteClient` with builder and shortcuts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradebyte_sdk::prelude::*;
//!
//! let client = TradebyteClient::builder()
//!     .hnr("1234")
//!     .credentials("api-user", "api-pass")
//!     .sandbox(true)
//!     .build()?;
//!
//! for order in client.get_orders().await? {
//!     let id = order.text("ORDER_DATA/TB_ID").unwrap_or_default();
//!     client.set_exported_order(id).await?;
//! }
//!
//! client
//!     .send_message(&serde_json::json!({ "MESSAGE": { "TB_ID": "991" } }))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Client configuration and credentials.
pub mod config;

/// Unified SDK error types.
pub mod error;

/// Network hosts and environments.
pub mod network;

/// XML ↔ `serde_json::Value` codec.
pub mod xml;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request executor with Basic auth.
pub mod http;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire shapes, sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TradebyteClient`, the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::client::{MessagesClient, OrdersClient, TradebyteClient, TradebyteClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::domain::order::Order;
    pub use crate::error::{ConfigError, SdkError, SdkResult, ValidationError, XmlError};
    pub use crate::network::{Environment, PRODUCTION_HOST, SANDBOX_HOST};
    pub use crate::xml::{as_list, to_list};
}
