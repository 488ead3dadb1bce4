//! JSON shape of a record.
//!
//! ```text
//! { "code": 12009, "key": "...", "message": "...", "caller": "stem:line",
//!   "icause"?: "...", "retry"?: true, "cause"?: <any> }
//! ```
//!
//! Decoding is lossy on purpose: the formal cause comes back as a text-only
//! [`ForeignError`], the informal cause comes back as plain data, and the
//! severity (not part of the shape) comes back as `Exception`.

use crate::{Cause, ErrorCode, ErrorRecord, ForeignError, FormalCause, Location, Severity, Tristate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use thiserror::Error;

/// Failures while converting records to or from JSON text.
#[derive(Debug, Error)]
pub enum WireError {
    /// Serializing a record failed.
    #[error("failed to encode error record")]
    Encode(#[source] serde_json::Error),
    /// The input was not a valid record.
    #[error("failed to decode error record")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RecordWire<'a> {
    pub(crate) code: ErrorCode,
    #[serde(default)]
    pub(crate) key: Cow<'a, str>,
    #[serde(default)]
    pub(crate) message: Cow<'a, str>,
    #[serde(default)]
    pub(crate) caller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) icause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) retry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) cause: Option<Value>,
}

impl<'a> From<&'a ErrorRecord> for RecordWire<'a> {
    fn from(record: &'a ErrorRecord) -> Self {
        Self {
            code: record.code(),
            key: Cow::Borrowed(record.translation_key()),
            message: Cow::Borrowed(record.message()),
            caller: record.caller().to_string(),
            icause: record.formal_cause().map(|c| c.to_string()),
            retry: record.retry().as_bool(),
            cause: record.cause().normalize(),
        }
    }
}

impl RecordWire<'_> {
    /// Same shape as the serde output, built without a fallible serializer.
    pub(crate) fn into_value(self) -> Value {
        let mut map = Map::new();
        map.insert("code".to_owned(), Value::from(self.code.value()));
        map.insert("key".to_owned(), Value::String(self.key.into_owned()));
        map.insert("message".to_owned(), Value::String(self.message.into_owned()));
        map.insert("caller".to_owned(), Value::String(self.caller));
        if let Some(icause) = self.icause {
            map.insert("icause".to_owned(), Value::String(icause));
        }
        if let Some(retry) = self.retry {
            map.insert("retry".to_owned(), Value::Bool(retry));
        }
        if let Some(cause) = self.cause {
            map.insert("cause".to_owned(), cause);
        }
        Value::Object(map)
    }

    pub(crate) fn into_record(self) -> ErrorRecord {
        let caller = Location::parse(&self.caller);
        let mut builder = ErrorRecord::builder(self.code, Severity::Exception)
            .key(self.key.into_owned())
            .message(self.message.into_owned())
            .retry(Tristate::from(self.retry))
            .at(caller);
        if let Some(icause) = self.icause {
            builder = builder.formal_cause(FormalCause::Foreign(ForeignError::text(icause)));
        }
        if let Some(cause) = self.cause {
            builder = builder.cause(Cause::from_json(cause));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted_not_null() {
        let record = ErrorRecord::builder(definitions::E_KEY_NOT_FOUND, Severity::Exception)
            .key("datastore.key_not_found")
            .message("Key not found")
            .at(Location::new("sequences", 545))
            .build();
        let value = record.object();
        assert_eq!(
            value,
            json!({
                "code": 17014,
                "key": "datastore.key_not_found",
                "message": "Key not found",
                "caller": "sequences:545",
            })
        );
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn missing_optional_input_fields_default() {
        let record: ErrorRecord = serde_json::from_value(json!({"code": 5000})).unwrap();
        assert_eq!(record.code(), definitions::E_INTERNAL);
        assert_eq!(record.message(), "");
        assert!(record.caller().is_unknown());
        assert!(record.cause().is_none());
    }

    #[test]
    fn decode_rejects_non_integer_code() {
        let err = ErrorRecord::from_json(r#"{"code": "abc"}"#).unwrap_err();
        assert!(matches!(err, WireError::Decode(_)));
    }
}
