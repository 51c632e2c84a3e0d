//! XML codec: XML documents to/from `serde_json::Value` trees.
//!
//! Decoding drops attributes and does not force arrays: a child element that
//! occurs once decodes as a single value, one that repeats decodes as an
//! array. [`to_list`] removes that ambiguity at the use site.
//!
//! Encoding takes the same tree shape back to XML. The `$` key carries
//! attributes and the `_` key carries element text.

mod build;
mod parse;

pub use build::{to_xml, to_xml_string};
pub use parse::from_str;

use serde_json::Value;

/// Object key holding an element's attributes when encoding.
pub const ATTR_KEY: &str = "$";

/// Object key holding an element's text when it also has children.
pub const TEXT_KEY: &str = "_";

/// Root element name used when a tree has no single top-level key.
pub const DEFAULT_ROOT: &str = "root";

/// Normalize a single-or-many field into a list.
///
/// `null` is empty, an array yields its elements, anything else is a
/// one-element list.
pub fn to_list(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Borrowing variant of [`to_list`].
pub fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Loose truthiness of a decoded tree: `null`, `false`, `0` and `""` are
/// treated as absent.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
