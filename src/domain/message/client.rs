//! Messages sub-client: post XML documents.

use serde::Serialize;

use crate::client::TradebyteClient;
use crate::domain::message::encode_body;
use crate::error::{SdkResult, ValidationError};

/// Fixed endpoint for message uploads.
pub const MESSAGES_PATH: &str = "messages/";

pub struct Messages<'a> {
    pub(crate) client: &'a TradebyteClient,
}

impl<'a> Messages<'a> {
    /// Encode `data` as XML and `POST messages/`. Returns the raw body.
    pub async fn send<T: Serialize + ?Sized>(&self, data: &T) -> SdkResult<String> {
        let body = encode_body(data, ValidationError::MissingDataParameter)?;
        self.client.http.post_xml(MESSAGES_PATH, body).await
    }

    /// Encode `data` as XML and POST it to `url`, relative to the account
    /// scope. Returns the raw body.
    pub async fn post<T: Serialize + ?Sized>(&self, url: &str, data: &T) -> SdkResult<String> {
        if url.is_empty() {
            return Err(ValidationError::MissingEndpoint.into());
        }
        let body = encode_body(data, ValidationError::MissingData)?;
        self.client.http.post_xml(url, body).await
    }
}
