//! Order domain: decoded `<ORDER>` records.

pub mod client;
pub mod wire;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SdkResult;

pub use client::Orders;

/// One `<ORDER>` element as returned by the API.
///
/// The shape is whatever Tradebyte sends: nested objects keyed by element
/// name, leaf values as strings, repeated elements as arrays. Use
/// [`Order::deserialize`] to map it onto a typed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Value);

impl Order {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Direct child field, e.g. `order.get("ORDER_DATA")`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text of a leaf at a `/`-separated path, e.g. `"ORDER_DATA/TB_ID"`.
    pub fn text(&self, path: &str) -> Option<&str> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.0, |node, segment| node.get(segment))
            .and_then(Value::as_str)
    }

    /// Map the record onto a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> SdkResult<T> {
        Ok(serde_json::from_value(self.0.clone())?)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Order {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Order> for Value {
    fn from(order: Order) -> Self {
        order.0
    }
}
