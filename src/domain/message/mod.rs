//! Message domain: caller-built XML documents posted to the API.

pub mod client;

use serde::Serialize;

use crate::error::{SdkResult, ValidationError};
use crate::xml;

pub use client::Messages;

/// Serialize `data` to an XML request body.
///
/// Data that converts to `null`, `false`, `0` or `""` is rejected with
/// `missing` before anything is encoded.
pub(crate) fn encode_body<T: Serialize + ?Sized>(
    data: &T,
    missing: ValidationError,
) -> SdkResult<String> {
    let tree = serde_json::to_value(data)?;
    if xml::is_blank(&tree) {
        return Err(missing.into());
    }
    Ok(xml::to_xml_string(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use serde_json::json;

    #[test]
    fn test_encode_body_rejects_blank_data() {
        let err = encode_body(&None::<String>, ValidationError::MissingData).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Validation(ValidationError::MissingData)
        ));

        let err = encode_body("", ValidationError::MissingDataParameter).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Validation(ValidationError::MissingDataParameter)
        ));
    }

    #[test]
    fn test_encode_body_builds_xml() {
        let body = encode_body(&json!({"Foo": "bar"}), ValidationError::MissingData).unwrap();
        assert!(body.contains("<Foo>bar</Foo>"));
    }

    #[test]
    fn test_encode_body_surfaces_codec_errors() {
        let err = encode_body(&json!({"bad name": 1}), ValidationError::MissingData).unwrap_err();
        assert!(matches!(err, SdkError::Xml(_)));
    }
}
