//! XML → `Value` decoding.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::XmlError;
use crate::xml::TEXT_KEY;

/// An element that has been opened but not yet closed.
struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
    has_cdata: bool,
}

impl Frame {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
            has_cdata: false,
        }
    }

    fn finish(self) -> (String, Value) {
        if self.children.is_empty() {
            return (self.name, Value::String(self.text));
        }
        let mut children = self.children;
        if self.has_cdata || !self.text.trim().is_empty() {
            children.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }
        (self.name, Value::Object(children))
    }
}

/// Decode an XML document into `{ <root name>: <root value> }`.
///
/// Attributes are ignored. Returns `Value::Null` when the input holds no
/// root element (e.g. an empty body).
pub fn from_str(xml: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::Parse(e.to_string()))?;

        match event {
            Event::Start(e) => {
                let name = element_name(&e)?;
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::Parse(format!(
                        "unexpected second root element <{name}>"
                    )));
                }
                stack.push(Frame::new(name));
            }
            Event::Empty(e) => {
                let name = element_name(&e)?;
                attach(&mut stack, &mut root, name, Value::String(String::new()))?;
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| XmlError::Parse("unbalanced closing tag".to_string()))?;
                let (name, value) = frame.finish();
                attach(&mut stack, &mut root, name, value)?;
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| XmlError::Parse(e.to_string()))?;
                match stack.last_mut() {
                    Some(top) => top.text.push_str(&text),
                    None if text.trim_start_matches('\u{feff}').trim().is_empty() => {}
                    None => return Err(outside_root(&text)),
                }
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = std::str::from_utf8(&raw)?;
                let top = stack.last_mut().ok_or_else(|| outside_root(text))?;
                top.text.push_str(text);
                top.has_cdata = true;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Parse(format!("unclosed element <{}>", open.name)));
    }

    Ok(match root {
        Some((name, value)) => {
            let mut doc = Map::new();
            doc.insert(name, value);
            Value::Object(doc)
        }
        None => Value::Null,
    })
}

fn outside_root(text: &str) -> XmlError {
    let snippet: String = text.trim().chars().take(32).collect();
    XmlError::Parse(format!("text outside of the root element: {snippet:?}"))
}

fn element_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    Ok(std::str::from_utf8(start.name().as_ref())?.to_string())
}

/// Hang a closed element on its parent, or make it the document root.
fn attach(
    stack: &mut [Frame],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => {
            insert_child(&mut parent.children, name, value);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some((name, value));
            Ok(())
        }
        None => Err(XmlError::Parse(format!(
            "unexpected second root element <{name}>"
        ))),
    }
}

/// Repeated names collapse into an array in document order.
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_is_null() {
        assert_eq!(from_str("").unwrap(), Value::Null);
        assert_eq!(from_str("  \n").unwrap(), Value::Null);
        assert_eq!(
            from_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_single_child_is_not_wrapped() {
        let xml = r#"<ORDER_LIST><ORDER><ORDER_DATA><TB_ID>1</TB_ID></ORDER_DATA></ORDER></ORDER_LIST>"#;
        let doc = from_str(xml).unwrap();
        assert_eq!(
            doc,
            json!({"ORDER_LIST": {"ORDER": {"ORDER_DATA": {"TB_ID": "1"}}}})
        );
    }

    #[test]
    fn test_repeated_children_become_array() {
        let xml = "<ITEMS><ITEM>a</ITEM><ITEM>b</ITEM><ITEM>c</ITEM></ITEMS>";
        let doc = from_str(xml).unwrap();
        assert_eq!(doc, json!({"ITEMS": {"ITEM": ["a", "b", "c"]}}));
    }

    #[test]
    fn test_attributes_are_ignored() {
        let xml = r#"<ORDER id="7" channel="zalando"><SKU sign="x">123</SKU></ORDER>"#;
        let doc = from_str(xml).unwrap();
        assert_eq!(doc, json!({"ORDER": {"SKU": "123"}}));
    }

    #[test]
    fn test_empty_elements_are_empty_strings() {
        let xml = "<A><B/><C></C></A>";
        assert_eq!(from_str(xml).unwrap(), json!({"A": {"B": "", "C": ""}}));
    }

    #[test]
    fn test_pretty_printed_whitespace_is_dropped() {
        let xml = "<A>\n  <B>1</B>\n  <C> two </C>\n</A>\n";
        assert_eq!(from_str(xml).unwrap(), json!({"A": {"B": "1", "C": " two "}}));
    }

    #[test]
    fn test_mixed_text_goes_under_text_key() {
        let xml = "<A>hello<B>1</B></A>";
        assert_eq!(from_str(xml).unwrap(), json!({"A": {"B": "1", "_": "hello"}}));
    }

    #[test]
    fn test_entities_and_cdata() {
        let xml = "<A><B>Fish &amp; Chips</B><C><![CDATA[<raw>]]></C></A>";
        assert_eq!(
            from_str(xml).unwrap(),
            json!({"A": {"B": "Fish & Chips", "C": "<raw>"}})
        );
    }

    #[test]
    fn test_mismatched_tags_fail() {
        assert!(matches!(from_str("<A><B></A>"), Err(XmlError::Parse(_))));
    }

    #[test]
    fn test_text_outside_root_fails() {
        for input in ["OK", "junk<A>1</A>", "<A>1</A>trailing", "<![CDATA[x]]><A/>"] {
            assert!(
                matches!(from_str(input), Err(XmlError::Parse(_))),
                "{input:?} should not decode"
            );
        }
    }

    #[test]
    fn test_whitespace_around_root_is_allowed() {
        let doc = from_str("\u{feff}\n  <A>1</A>\n\n").unwrap();
        assert_eq!(doc, json!({"A": "1"}));
    }

    #[test]
    fn test_unclosed_root_fails() {
        assert!(matches!(from_str("<A><B>1</B>"), Err(XmlError::Parse(_))));
    }
}
