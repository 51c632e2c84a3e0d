//! Low-level HTTP client: `TradebyteHttp`.
//!
//! Owns the `reqwest::Client`, the account-scoped base URL and the Basic
//! credentials. Returns raw response bodies; XML decoding happens in the
//! domain sub-clients.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Url};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ConfigError, SdkError, SdkResult};

/// Content type of every XML request body.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("tradebyte-sdk/", env!("CARGO_PKG_VERSION"));

/// Low-level HTTP client for the Tradebyte REST API.
#[derive(Clone)]
pub struct TradebyteHttp {
    /// `<origin>/<hnr>`, no trailing slash.
    base_url: String,
    client: Client,
    user: String,
    pass: String,
}

impl TradebyteHttp {
    /// Build an HTTP client scoped to `config`'s account.
    ///
    /// `origin` overrides the environment host when set. `timeout` is
    /// optional; without it the transport default applies.
    pub fn new(
        config: &ClientConfig,
        origin: Option<&str>,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let origin = match origin {
            Some(url) => validate_origin(url)?,
            None => config.environment().origin(),
        };

        let mut headers = HeaderMap::new();
        let agent = user_agent.unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(agent).map_err(|_| ConfigError::InvalidHeader {
                name: USER_AGENT.to_string(),
            })?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Self {
            base_url: format!("{}/{}", origin, urlencoding::encode(config.hnr())),
            client,
            user: config.user().to_string(),
            pass: config.pass().to_string(),
        })
    }

    /// Account-scoped base URL, e.g. `https://rest.trade-server.net/1234`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the account scope.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> SdkResult<String> {
        self.request(Method::GET, path, query, None, None).await
    }

    /// POST with no body.
    pub(crate) async fn post_empty(&self, path: &str) -> SdkResult<String> {
        self.request(Method::POST, path, None::<&()>, None, None)
            .await
    }

    /// POST an XML document.
    pub(crate) async fn post_xml(&self, path: &str, xml: String) -> SdkResult<String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));
        self.request(Method::POST, path, None::<&()>, Some(xml), Some(headers))
            .await
    }

    /// Issue one request with Basic auth and return the raw body.
    ///
    /// A response with a non-2xx status becomes [`SdkError::Http`]; a request
    /// that never got a response surfaces the transport error unchanged.
    pub(crate) async fn request<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<String>,
        headers: Option<HeaderMap>,
    ) -> SdkResult<String> {
        let url = self.url(path);
        let mut req = self
            .client
            .request(method.clone(), &url)
            .basic_auth(&self.user, Some(&self.pass));

        if let Some(q) = query {
            req = req.query(q);
        }
        if let Some(h) = headers {
            req = req.headers(h);
        }
        if let Some(b) = body {
            req = req.body(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        tracing::debug!(method = %method, path, status = status.as_u16(), "Tradebyte response");

        if !status.is_success() {
            tracing::warn!(method = %method, path, status = status.as_u16(), "Tradebyte request failed");
            return Err(SdkError::Http {
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}

impl fmt::Debug for TradebyteHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradebyteHttp")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Accept `http(s)://host[:port][/prefix]`, returned without a trailing slash.
fn validate_origin(url: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };
    let parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("1234", "api", "secret").unwrap()
    }

    #[test]
    fn test_base_url_production() {
        let http = TradebyteHttp::new(&config(), None, None, None).unwrap();
        assert_eq!(http.base_url(), "https://rest.trade-server.net/1234");
    }

    #[test]
    fn test_base_url_sandbox() {
        let http = TradebyteHttp::new(&config().with_sandbox(true), None, None, None).unwrap();
        assert_eq!(http.base_url(), "https://reststaging.tradebyte.com/1234");
    }

    #[test]
    fn test_url_joins_relative_paths() {
        let http = TradebyteHttp::new(&config(), None, None, None).unwrap();
        assert_eq!(
            http.url("orders/"),
            "https://rest.trade-server.net/1234/orders/"
        );
        assert_eq!(
            http.url("/messages/"),
            "https://rest.trade-server.net/1234/messages/"
        );
    }

    #[test]
    fn test_hnr_is_encoded_as_path_segment() {
        let config = ClientConfig::new("12 34/x", "api", "secret").unwrap();
        let http = TradebyteHttp::new(&config, None, None, None).unwrap();
        assert_eq!(http.base_url(), "https://rest.trade-server.net/12%2034%2Fx");
    }

    #[test]
    fn test_origin_override() {
        let http =
            TradebyteHttp::new(&config(), Some("http://127.0.0.1:8080/"), None, None).unwrap();
        assert_eq!(http.base_url(), "http://127.0.0.1:8080/1234");
    }

    #[test]
    fn test_origin_override_rejects_bad_urls() {
        for bad in ["not a url", "ftp://example.com"] {
            let err = TradebyteHttp::new(&config(), Some(bad), None, None).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }), "{bad}");
        }
    }

    #[test]
    fn test_invalid_user_agent() {
        let err = TradebyteHttp::new(&config(), None, None, Some("bad\nagent")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { .. }));
    }

    #[test]
    fn test_debug_hides_password() {
        let http = TradebyteHttp::new(&config(), None, None, None).unwrap();
        assert!(!format!("{http:?}").contains("secret"));
    }
}
