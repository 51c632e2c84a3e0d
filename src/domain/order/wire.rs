//! Wire shape of the `GET orders/` response.
//!
//! ```xml
//! <ORDER_LIST>
//!   <ORDER>...</ORDER>
//! </ORDER_LIST>
//! ```

use serde_json::Value;

use crate::domain::order::Order;
use crate::xml;

/// Name of the list block element.
pub const ORDER_LIST: &str = "ORDER_LIST";

/// Name of a single order element.
pub const ORDER: &str = "ORDER";

/// Extract orders from a decoded `orders/` document.
///
/// Each `ORDER_LIST` block yields at most one order: when a block holds
/// several `ORDER` elements only the first is kept. Callers that need every
/// order in a block should decode the body with [`xml::from_str`] and walk
/// it with [`xml::to_list`].
pub fn orders_from_document(doc: Value) -> Vec<Order> {
    let list = match doc {
        Value::Object(mut root) => root.remove(ORDER_LIST).unwrap_or(Value::Null),
        _ => Value::Null,
    };
    // `<ORDER_LIST/>` decodes to "".
    if xml::is_blank(&list) {
        return Vec::new();
    }

    xml::to_list(list)
        .into_iter()
        .filter_map(|block| match block {
            Value::Object(mut block) => block.remove(ORDER),
            _ => None,
        })
        .filter_map(|order| match order {
            Value::Array(orders) => orders.into_iter().next(),
            single => Some(single),
        })
        .map(Order::new)
        .collect()
}
