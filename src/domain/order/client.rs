//! Orders sub-client: list orders, mark orders as exported.

use serde::Serialize;
use serde_json::Value;

use crate::client::TradebyteClient;
use crate::domain::order::wire::orders_from_document;
use crate::domain::order::Order;
use crate::error::{SdkResult, ValidationError};
use crate::xml;

pub struct Orders<'a> {
    pub(crate) client: &'a TradebyteClient,
}

impl<'a> Orders<'a> {
    /// `GET orders/` with no query parameters.
    pub async fn list(&self) -> SdkResult<Vec<Order>> {
        self.fetch(None::<&()>).await
    }

    /// `GET orders/` with query parameters passed through verbatim,
    /// e.g. `&[("channel", "zade")]`.
    pub async fn list_with<Q: Serialize + ?Sized>(&self, query: &Q) -> SdkResult<Vec<Order>> {
        self.fetch(Some(query)).await
    }

    /// `POST orders/<id>/exported`. Returns the raw response body.
    ///
    /// Ids that serialize to `null`, `false`, `0` or `""` are rejected; the
    /// string `"0"` is a valid id.
    pub async fn set_exported(&self, order_id: impl Serialize) -> SdkResult<String> {
        let order_id = serde_json::to_value(order_id)?;
        if xml::is_blank(&order_id) {
            return Err(ValidationError::MissingOrderId.into());
        }
        let order_id = match order_id {
            Value::String(s) => s,
            other => other.to_string(),
        };
        let path = format!("orders/{}/exported", urlencoding::encode(&order_id));
        self.client.http.post_empty(&path).await
    }

    async fn fetch<Q: Serialize + ?Sized>(&self, query: Option<&Q>) -> SdkResult<Vec<Order>> {
        let body = self.client.http.get("orders/", query).await?;
        let doc = xml::from_str(&body)?;
        let orders = orders_from_document(doc);
        tracing::debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }
}
