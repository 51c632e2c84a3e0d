//! High-level client: `TradebyteClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the configuration and the accessors, plus
//! flat shortcuts for the four API operations.

use std::time::Duration;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::domain::message::client::Messages;
use crate::domain::order::client::Orders;
use crate::domain::order::Order;
use crate::error::SdkResult;
use crate::http::TradebyteHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::message::client::Messages as MessagesClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the SDK.
///
/// Cheap to clone; clones share the underlying connection pool. All
/// operations are independent round trips and may run concurrently.
#[derive(Debug, Clone)]
pub struct TradebyteClient {
    pub(crate) http: TradebyteHttp,
    config: ClientConfig,
}

impl TradebyteClient {
    /// Create a client for `config` with transport defaults.
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        Self::builder().config(config).build()
    }

    /// Create a client from `TRADEBYTE_*` environment variables.
    pub fn from_env() -> SdkResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn builder() -> TradebyteClientBuilder {
        TradebyteClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Account-scoped base URL all paths are resolved against.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages { client: self }
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Fetch orders (`GET orders/`).
    ///
    /// Only the first `ORDER` of each `ORDER_LIST` block is returned.
    pub async fn get_orders(&self) -> SdkResult<Vec<Order>> {
        self.orders().list().await
    }

    /// Fetch orders with query parameters passed through to the API.
    pub async fn get_orders_with<Q: Serialize + ?Sized>(
        &self,
        query: &Q,
    ) -> SdkResult<Vec<Order>> {
        self.orders().list_with(query).await
    }

    /// Mark an order as exported (`POST orders/<id>/exported`).
    pub async fn set_exported_order(&self, order_id: impl Serialize) -> SdkResult<String> {
        self.orders().set_exported(order_id).await
    }

    /// Post `data` as XML to `messages/`.
    pub async fn send_message<T: Serialize + ?Sized>(&self, data: &T) -> SdkResult<String> {
        self.messages().send(data).await
    }

    /// Post `data` as XML to an arbitrary path under the account scope.
    pub async fn post<T: Serialize + ?Sized>(&self, url: &str, data: &T) -> SdkResult<String> {
        self.messages().post(url, data).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct TradebyteClientBuilder {
    hnr: Option<String>,
    user: Option<String>,
    pass: Option<String>,
    sandbox: bool,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TradebyteClientBuilder {
    /// Merchant account identifier.
    pub fn hnr(mut self, hnr: impl Into<String>) -> Self {
        self.hnr = Some(hnr.into());
        self
    }

    pub fn credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.pass = Some(pass.into());
        self
    }

    /// Use the staging host instead of production.
    pub fn sandbox(mut self, is_sandbox: bool) -> Self {
        self.sandbox = is_sandbox;
        self
    }

    /// Take account, credentials and environment from an existing config.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.sandbox = config.is_sandbox();
        self.hnr = Some(config.hnr().to_string());
        self.user = Some(config.user().to_string());
        self.pass = Some(config.pass().to_string());
        self
    }

    /// Replace `https://<host>`, e.g. to target a proxy or a mock server.
    /// The account segment is still appended.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Per-request timeout. Unset means the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    ///
    /// `SdkError::Config` when `hnr`, user or password is missing, or when
    /// the base URL / user agent is invalid.
    pub fn build(self) -> SdkResult<TradebyteClient> {
        let config = ClientConfig::new(
            self.hnr.unwrap_or_default(),
            self.user.unwrap_or_default(),
            self.pass.unwrap_or_default(),
        )?
        .with_sandbox(self.sandbox);

        let http = TradebyteHttp::new(
            &config,
            self.base_url.as_deref(),
            self.timeout,
            self.user_agent.as_deref(),
        )?;

        Ok(TradebyteClient { http, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, SdkError};

    #[test]
    fn test_builder_defaults_to_production() {
        let client = TradebyteClient::builder()
            .hnr("1234")
            .credentials("api", "secret")
            .build()
            .unwrap();
        assert!(!client.config().is_sandbox());
        assert_eq!(client.base_url(), "https://rest.trade-server.net/1234");
    }

    #[test]
    fn test_builder_sandbox() {
        let client = TradebyteClient::builder()
            .hnr("1234")
            .credentials("api", "secret")
            .sandbox(true)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://reststaging.tradebyte.com/1234");
    }

    #[test]
    fn test_builder_missing_credentials() {
        let err = TradebyteClient::builder().hnr("1234").build().unwrap_err();
        assert!(matches!(
            err,
            SdkError::Config(ConfigError::MissingCredentials { field: "user" })
        ));

        let err = TradebyteClient::builder()
            .credentials("api", "secret")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Config(ConfigError::MissingCredentials { field: "hnr" })
        ));
    }

    #[test]
    fn test_new_from_config() {
        let config = ClientConfig::new("77", "api", "secret")
            .unwrap()
            .with_sandbox(true);
        let client = TradebyteClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TradebyteClient>();
    }
}
