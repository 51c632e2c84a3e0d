//! `Value` → XML encoding.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{SdkError, XmlError};
use crate::xml::{ATTR_KEY, DEFAULT_ROOT, TEXT_KEY};

type XmlWriter = Writer<Vec<u8>>;

/// Serialize any `Serialize` value to an XML document.
///
/// The value is first converted to a JSON tree, then encoded with
/// [`to_xml_string`].
pub fn to_xml<T: Serialize + ?Sized>(data: &T) -> Result<String, SdkError> {
    let tree = serde_json::to_value(data)?;
    Ok(to_xml_string(&tree)?)
}

/// Encode a tree as a standalone, two-space indented XML document.
///
/// An object with a single key names the root element after that key;
/// anything else is wrapped in `<root>`.
pub fn to_xml_string(value: &Value) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(write_err)?;

    match value {
        Value::Object(map) if map.len() == 1 => {
            if let Some((name, content)) = map.iter().next() {
                write_element(&mut writer, name, content)?;
            }
        }
        other => write_element(&mut writer, DEFAULT_ROOT, other)?,
    }

    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Write(e.to_string()))
}

fn write_element(writer: &mut XmlWriter, name: &str, value: &Value) -> Result<(), XmlError> {
    validate_name(name)?;

    match value {
        Value::Null => write_empty(writer, BytesStart::new(name)),
        Value::Object(map) => {
            let mut start = BytesStart::new(name);
            if let Some(Value::Object(attrs)) = map.get(ATTR_KEY) {
                for (key, attr) in attrs {
                    validate_name(key)?;
                    let attr = scalar_text(attr).unwrap_or_default();
                    start.push_attribute((key.as_str(), attr.as_str()));
                }
            }
            if map.keys().all(|key| key == ATTR_KEY) {
                return write_empty(writer, start);
            }
            writer.write_event(Event::Start(start)).map_err(write_err)?;
            write_children(writer, map)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(write_err)
        }
        Value::Array(entries) => {
            if entries.is_empty() {
                return write_empty(writer, BytesStart::new(name));
            }
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(write_err)?;
            for entry in entries {
                match entry {
                    Value::Object(map) => write_children(writer, map)?,
                    other => write_text(writer, other)?,
                }
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(write_err)
        }
        scalar => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(write_err)?;
            write_text(writer, scalar)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(write_err)
        }
    }
}

fn write_children(writer: &mut XmlWriter, map: &Map<String, Value>) -> Result<(), XmlError> {
    for (key, child) in map {
        match key.as_str() {
            ATTR_KEY => {}
            TEXT_KEY => write_text(writer, child)?,
            _ => match child {
                // Arrays repeat the element once per entry.
                Value::Array(entries) => {
                    for entry in entries {
                        write_element(writer, key, entry)?;
                    }
                }
                other => write_element(writer, key, other)?,
            },
        }
    }
    Ok(())
}

fn write_text(writer: &mut XmlWriter, value: &Value) -> Result<(), XmlError> {
    match scalar_text(value) {
        Some(text) => writer
            .write_event(Event::Text(BytesText::new(&text)))
            .map_err(write_err),
        None => Ok(()),
    }
}

fn write_empty(writer: &mut XmlWriter, start: BytesStart<'_>) -> Result<(), XmlError> {
    writer.write_event(Event::Empty(start)).map_err(write_err)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn validate_name(name: &str) -> Result<(), XmlError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'));
    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(XmlError::InvalidName(name.to_string()))
    }
}

fn write_err(e: impl std::fmt::Display) -> XmlError {
    XmlError::Write(e.to_string())
}
