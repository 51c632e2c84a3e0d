//! HTTP client layer: `TradebyteHttp`, the request executor.

pub mod client;

pub use client::{TradebyteHttp, DEFAULT_USER_AGENT, XML_CONTENT_TYPE};
