//! Cause values carried by records.
//!
//! A record has two independent cause slots:
//!
//! - the **formal** cause ([`FormalCause`]): the typed failure this record
//!   wraps, exposed through `std::error::Error::source`;
//! - the **informal** cause ([`Cause`]): open diagnostic detail, possibly
//!   another record, possibly a map of named sub-details.
//!
//! Both are closed unions. [`Cause::normalize`] turns the informal cause
//! into a JSON value for the wire; it is total, every variant has exactly
//! one rendering.
//!
//! Records own their causes, so a record can never contain itself and the
//! walks below always terminate.

use crate::{ErrorCode, ErrorRecord};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Named sub-details of a structured cause.
pub type CauseMap = BTreeMap<String, CauseValue>;

// ============================================================================
// Foreign errors
// ============================================================================

/// A failure that did not originate as an [`ErrorRecord`].
///
/// Keeps the rendered text and, when built from a live error, the error
/// itself for downcasting. Decoded records only have the text.
#[derive(Clone)]
pub struct ForeignError {
    message: String,
    inner: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl ForeignError {
    /// Wrap a live error.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            inner: Some(Arc::new(error)),
        }
    }

    /// Text-only foreign error.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            inner: None,
        }
    }

    /// Rendered text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, if this was built from one.
    pub fn get_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.as_deref()
    }
}

impl fmt::Debug for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignError")
            .field("message", &self.message)
            .field("live", &self.inner.is_some())
            .finish()
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ForeignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().and_then(|e| e.source())
    }
}

impl From<std::io::Error> for ForeignError {
    fn from(error: std::io::Error) -> Self {
        Self::new(error)
    }
}

impl From<serde_json::Error> for ForeignError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error)
    }
}

impl From<String> for ForeignError {
    fn from(message: String) -> Self {
        Self::text(message)
    }
}

impl From<&str> for ForeignError {
    fn from(message: &str) -> Self {
        Self::text(message)
    }
}

// ============================================================================
// Formal cause
// ============================================================================

/// The typed failure a record wraps.
#[derive(Debug, Clone)]
pub enum FormalCause {
    /// Another record.
    Record(Box<ErrorRecord>),
    /// A non-record error.
    Foreign(ForeignError),
}

impl FormalCause {
    /// The wrapped record, if the link is typed.
    pub fn as_record(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Foreign(_) => None,
        }
    }

    pub(crate) fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Record(record) => &**record,
            Self::Foreign(foreign) => foreign,
        }
    }
}

impl fmt::Display for FormalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(record) => fmt::Display::fmt(record, f),
            Self::Foreign(foreign) => fmt::Display::fmt(foreign, f),
        }
    }
}

impl From<ErrorRecord> for FormalCause {
    fn from(record: ErrorRecord) -> Self {
        Self::Record(Box::new(record))
    }
}

impl From<ForeignError> for FormalCause {
    fn from(foreign: ForeignError) -> Self {
        Self::Foreign(foreign)
    }
}

impl From<std::io::Error> for FormalCause {
    fn from(error: std::io::Error) -> Self {
        Self::Foreign(ForeignError::new(error))
    }
}

impl From<serde_json::Error> for FormalCause {
    fn from(error: serde_json::Error) -> Self {
        Self::Foreign(ForeignError::new(error))
    }
}

// ============================================================================
// Cause values
// ============================================================================

/// One value inside a structured cause.
#[derive(Debug, Clone)]
pub enum CauseValue {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// 32-bit integer. Matched by `has_cause` when stored under `code`.
    I32(i32),
    /// 64-bit integer. Never matched by `has_cause`.
    I64(i64),
    /// Float; non-finite values render as text.
    F64(f64),
    /// Text.
    Text(String),
    /// Typed error code. Matched by `has_cause` when stored under `code`.
    Code(ErrorCode),
    /// Ordered list.
    List(Vec<CauseValue>),
    /// Nested map.
    Map(CauseMap),
    /// Nested record.
    Record(Box<ErrorRecord>),
    /// Foreign error, rendered as its text.
    Foreign(ForeignError),
}

impl CauseValue {
    /// JSON rendering.
    pub fn normalize(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::I32(n) => Value::from(*n),
            Self::I64(n) => Value::from(*n),
            Self::F64(n) => Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(n.to_string())),
            Self::Text(s) => Value::String(s.clone()),
            Self::Code(code) => Value::from(code.value()),
            Self::List(items) => Value::Array(items.iter().map(Self::normalize).collect()),
            Self::Map(map) => normalize_map(map),
            Self::Record(record) => record.object(),
            Self::Foreign(foreign) => Value::String(foreign.message().to_owned()),
        }
    }

    /// Rebuild from decoded JSON. Integers come back as `I64`; unsigned
    /// integers past `i64::MAX` keep their digits as `Text`.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::I64(i)
                } else if n.is_u64() {
                    Self::Text(n.to_string())
                } else if let Some(f) = n.as_f64() {
                    Self::F64(f)
                } else {
                    Self::Text(n.to_string())
                }
            }
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Code of this node when it can carry one.
    fn typed_code(&self) -> Option<ErrorCode> {
        match self {
            Self::I32(n) => Some(ErrorCode::new(*n)),
            Self::Code(code) => Some(*code),
            _ => None,
        }
    }

    fn mentions_code(&self, code: ErrorCode) -> bool {
        match self {
            Self::Record(record) => record.has_cause(code),
            Self::Map(map) => map_mentions_code(map, code),
            _ => false,
        }
    }
}

macro_rules! cause_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for CauseValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

cause_value_from! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f64 => F64,
    String => Text,
    &str => Text,
    ErrorCode => Code,
    Vec<CauseValue> => List,
    CauseMap => Map,
    ErrorRecord => Record,
    ForeignError => Foreign,
}

fn normalize_map(map: &CauseMap) -> Value {
    let object: Map<String, Value> = map
        .iter()
        .map(|(k, v)| (k.clone(), v.normalize()))
        .collect();
    Value::Object(object)
}

fn map_mentions_code(map: &CauseMap, code: ErrorCode) -> bool {
    if map.get("code").and_then(CauseValue::typed_code) == Some(code) {
        return true;
    }
    map.get("cause").is_some_and(|next| next.mentions_code(code))
}

// ============================================================================
// Informal cause
// ============================================================================

/// Informal diagnostic cause of a record.
#[derive(Debug, Clone, Default)]
pub enum Cause {
    /// No cause.
    #[default]
    None,
    /// Free text.
    Opaque(String),
    /// Named sub-details.
    Structured(CauseMap),
    /// Another record.
    Chained(Box<ErrorRecord>),
    /// A non-record error.
    Foreign(ForeignError),
}

impl Cause {
    /// Structured cause from `(name, value)` pairs.
    pub fn structured<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<CauseValue>,
    {
        Self::Structured(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether no cause is set.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// JSON rendering; `None` when there is no cause.
    pub fn normalize(&self) -> Option<Value> {
        match self {
            Self::None => None,
            Self::Opaque(text) => Some(Value::String(text.clone())),
            Self::Structured(map) => Some(normalize_map(map)),
            Self::Chained(record) => Some(record.object()),
            Self::Foreign(foreign) => Some(Value::String(foreign.message().to_owned())),
        }
    }

    /// Rebuild from decoded JSON: strings become `Opaque`, objects
    /// `Structured`, anything else `Opaque` holding its JSON text.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::String(text) => Self::Opaque(text),
            Value::Object(map) => Self::Structured(
                map.into_iter()
                    .map(|(k, v)| (k, CauseValue::from_json(v)))
                    .collect(),
            ),
            other => Self::Opaque(other.to_string()),
        }
    }

    /// Walk of the informal chain used by `ErrorRecord::has_cause`.
    pub(crate) fn mentions_code(&self, code: ErrorCode) -> bool {
        match self {
            Self::Chained(record) => record.has_cause(code),
            Self::Structured(map) => map_mentions_code(map, code),
            Self::None | Self::Opaque(_) | Self::Foreign(_) => false,
        }
    }

    /// Walk of the informal chain used by `ErrorRecord::contains_text`.
    pub(crate) fn mentions_text(&self, text: &str) -> bool {
        self.normalize()
            .is_some_and(|value| value_mentions_text(&value, text))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Opaque(text) => f.write_str(text),
            Self::Structured(map) => write!(f, "{}", normalize_map(map)),
            Self::Chained(record) => fmt::Display::fmt(record, f),
            Self::Foreign(foreign) => fmt::Display::fmt(foreign, f),
        }
    }
}

impl From<ErrorRecord> for Cause {
    fn from(record: ErrorRecord) -> Self {
        Self::Chained(Box::new(record))
    }
}

impl From<ForeignError> for Cause {
    fn from(foreign: ForeignError) -> Self {
        Self::Foreign(foreign)
    }
}

impl From<String> for Cause {
    fn from(text: String) -> Self {
        Self::Opaque(text)
    }
}

impl From<&str> for Cause {
    fn from(text: &str) -> Self {
        Self::Opaque(text.to_owned())
    }
}

impl From<CauseMap> for Cause {
    fn from(map: CauseMap) -> Self {
        Self::Structured(map)
    }
}

/// Substring search over every leaf of a normalized node.
fn value_mentions_text(value: &Value, text: &str) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => s.contains(text),
        Value::Bool(_) | Value::Number(_) => value.to_string().contains(text),
        Value::Array(items) => items.iter().any(|item| value_mentions_text(item, text)),
        Value::Object(map) => map.values().any(|item| value_mentions_text(item, text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{definitions, Severity};
    use serde_json::json;

    fn record(code: ErrorCode, message: &str) -> ErrorRecord {
        ErrorRecord::builder(code, Severity::Exception)
            .message(message.to_owned())
            .build()
    }

    #[test]
    fn non_finite_floats_render_as_text() {
        assert_eq!(CauseValue::F64(f64::NAN).normalize(), json!("NaN"));
        assert_eq!(CauseValue::F64(f64::INFINITY).normalize(), json!("inf"));
        assert_eq!(CauseValue::F64(1.5).normalize(), json!(1.5));
    }

    #[test]
    fn structured_cause_normalizes_recursively() {
        let nested = record(definitions::E_SUBQUERY_BUILD, "Unable to run subquery");
        let cause = Cause::structured([
            ("cause", CauseValue::from(nested)),
            ("help", CauseValue::from("see docs")),
            ("limit", CauseValue::from(10_i64)),
        ]);
        let value = cause.normalize().unwrap();
        assert_eq!(value["help"], json!("see docs"));
        assert_eq!(value["limit"], json!(10));
        assert_eq!(value["cause"]["code"], json!(5370));
        assert_eq!(value["cause"]["message"], json!("Unable to run subquery"));
    }

    #[test]
    fn foreign_keeps_live_error_for_downcasting() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let foreign = ForeignError::new(io);
        assert_eq!(foreign.message(), "missing file");
        let live = foreign.get_ref().and_then(|e| e.downcast_ref::<std::io::Error>());
        assert_eq!(live.map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
        assert!(ForeignError::text("plain").get_ref().is_none());
    }

    #[test]
    fn decoded_cause_shapes() {
        assert!(matches!(Cause::from_json(json!("text")), Cause::Opaque(t) if t == "text"));
        assert!(matches!(Cause::from_json(json!([1, 2])), Cause::Opaque(t) if t == "[1,2]"));
        assert!(matches!(Cause::from_json(json!(null)), Cause::None));
        let Cause::Structured(map) = Cause::from_json(json!({"code": 5370})) else {
            panic!("expected a structured cause");
        };
        assert!(matches!(map.get("code"), Some(CauseValue::I64(5370))));
    }

    #[test]
    fn code_lookup_ignores_wide_integers() {
        let narrow = Cause::structured([("code", CauseValue::I32(12033))]);
        let typed = Cause::structured([("code", CauseValue::Code(definitions::E_CAS_MISMATCH))]);
        let wide = Cause::structured([("code", CauseValue::I64(12033))]);
        assert!(narrow.mentions_code(definitions::E_CAS_MISMATCH));
        assert!(typed.mentions_code(definitions::E_CAS_MISMATCH));
        assert!(!wide.mentions_code(definitions::E_CAS_MISMATCH));
    }

    #[test]
    fn unsigned_integers_past_i64_keep_their_digits() {
        let decoded = CauseValue::from_json(json!({
            "big": 18446744073709551615u64,
            "edge": 9223372036854775807i64,
            "ratio": 0.5,
        }));
        let CauseValue::Map(map) = decoded else {
            panic!("expected a map");
        };
        assert!(matches!(&map["big"], CauseValue::Text(s) if s == "18446744073709551615"));
        assert!(matches!(map["edge"], CauseValue::I64(i64::MAX)));
        assert!(matches!(map["ratio"], CauseValue::F64(f) if f == 0.5));
    }

    #[test]
    fn code_lookup_follows_map_cause_entries() {
        let mut inner = CauseMap::new();
        inner.insert("code".into(), CauseValue::I32(17014));
        let outer = Cause::structured([
            ("code", CauseValue::I32(5002)),
            ("cause", CauseValue::Map(inner)),
        ]);
        assert!(outer.mentions_code(definitions::E_KEY_NOT_FOUND));
        assert!(!outer.mentions_code(definitions::E_DUPLICATE_KEY));
    }

    #[test]
    fn structured_display_is_json_text() {
        let cause = Cause::structured([("cause", "disk full")]);
        assert_eq!(cause.to_string(), r#"{"cause":"disk full"}"#);
    }
}
