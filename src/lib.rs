//! # Query Errors
//!
//! Structured errors and the diagnostic catalog for the query service.
//!
//! ## Design Philosophy
//!
//! 1. **One error shape everywhere**: every subsystem raises an [`ErrorRecord`]
//! 2. **Codes are stable identities**: declared once, range-checked at compile time
//! 3. **Two cause chains**: a typed formal chain and an informal diagnostic chain
//! 4. **Serializable by construction**: every record has one JSON rendering
//! 5. **Documentation lives next to codes**: the [`Catalog`] explains a code to operators
//!
//! ## Quick Start
//!
//! ```rust
//! use query_errors::{definitions, ErrorRecord, Result, Severity};
//!
//! fn fetch(key: &str) -> Result<()> {
//!     Err(ErrorRecord::builder(definitions::E_KEY_NOT_FOUND, Severity::Exception)
//!         .key("datastore.key_not_found")
//!         .message(format!("Key not found: {}", key))
//!         .build())
//! }
//!
//! let err = fetch("airline_10").unwrap_err();
//! assert!(err.is_fatal());
//! assert_eq!(err.object()["code"], 17014);
//! ```
//!
//! ## Cause Chains
//!
//! ```rust
//! use query_errors::{definitions, ErrorRecord, Severity};
//!
//! let inner = ErrorRecord::builder(definitions::E_SUBQUERY_BUILD, Severity::Exception)
//!     .message("Unable to run subquery")
//!     .build();
//! let outer = ErrorRecord::builder(definitions::E_EXECUTION_INTERNAL, Severity::Exception)
//!     .message("Execution internal error: subquery")
//!     .cause(inner)
//!     .build();
//!
//! assert!(outer.has_cause(definitions::E_SUBQUERY_BUILD));
//! assert!(!outer.has_icause(definitions::E_SUBQUERY_BUILD));
//! assert!(outer.contains_text("Unable to run"));
//! ```
//!
//! ## Catalog
//!
//! ```rust
//! use query_errors::{definitions, Catalog};
//!
//! let catalog = Catalog::standard();
//! let entry = catalog.describe(definitions::E_CAS_MISMATCH).unwrap();
//! assert_eq!(entry.description(), "CAS mismatch");
//! assert!(catalog.is_user_error(definitions::E_CAS_MISMATCH));
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: untruncated log formatting (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::result;

pub mod catalog;
pub mod cause;
pub mod codes;
pub mod convenience;
pub mod definitions;
mod entries;
pub mod factories;
pub mod location;
pub mod logging;
pub mod models;
pub mod wire;

pub use catalog::*;
pub use cause::*;
pub use codes::*;
pub use definitions::*;
pub use factories::*;
pub use location::*;
pub use logging::*;
pub use models::*;
pub use wire::WireError;

use wire::RecordWire;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, ErrorRecord>;

// ============================================================================
// Error Record
// ============================================================================

/// The structured error raised by every subsystem.
///
/// Built once through [`ErrorRecord::builder`]. Afterwards only the
/// translation key and the informal cause may change, through `&mut`
/// setters, while a handler enriches the error on its way up.
///
/// # Text rendering
///
/// `Display` picks the first available of:
///
/// 1. `"{message} - cause: {formal cause}"`
/// 2. the message
/// 3. the formal cause
/// 4. the informal cause
/// 5. `"Unspecified error."`
///
/// Log parsers match on this text, so the order is fixed.
#[derive(Debug, Clone)]
#[must_use = "errors should be handled or logged"]
pub struct ErrorRecord {
    code: ErrorCode,
    key: Cow<'static, str>,
    message: Cow<'static, str>,
    caller: Location,
    level: Severity,
    once_only: bool,
    retry: Tristate,
    formal_cause: Option<FormalCause>,
    cause: Cause,
}

/// Builder returned by [`ErrorRecord::builder`].
#[derive(Debug)]
#[must_use = "call build() to obtain the record"]
pub struct RecordBuilder {
    code: ErrorCode,
    key: Cow<'static, str>,
    message: Cow<'static, str>,
    caller: Option<Location>,
    level: Severity,
    once_only: bool,
    retry: Tristate,
    formal_cause: Option<FormalCause>,
    cause: Cause,
}

impl RecordBuilder {
    /// Translation key used for localized message lookup.
    #[inline]
    pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.key = key.into();
        self
    }

    /// Rendered message.
    #[inline]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Typed failure this record wraps.
    #[inline]
    pub fn formal_cause(mut self, cause: impl Into<FormalCause>) -> Self {
        self.formal_cause = Some(cause.into());
        self
    }

    /// Informal diagnostic cause.
    #[inline]
    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = cause.into();
        self
    }

    /// Advisory retry hint.
    #[inline]
    pub fn retry(mut self, retry: impl Into<Tristate>) -> Self {
        self.retry = retry.into();
        self
    }

    /// Report this record at most once per request.
    #[inline]
    pub fn once_only(mut self) -> Self {
        self.once_only = true;
        self
    }

    /// Explicit caller location instead of the captured one.
    #[inline]
    pub fn at(mut self, location: Location) -> Self {
        self.caller = Some(location);
        self
    }

    /// Finish the record, capturing the caller unless [`at`](Self::at) was used.
    #[track_caller]
    pub fn build(self) -> ErrorRecord {
        let caller = match self.caller {
            Some(location) => location,
            None => Location::caller(),
        };
        ErrorRecord {
            code: self.code,
            key: self.key,
            message: self.message,
            caller,
            level: self.level,
            once_only: self.once_only,
            retry: self.retry,
            formal_cause: self.formal_cause,
            cause: self.cause,
        }
    }
}

impl ErrorRecord {
    /// Start building a record.
    #[inline]
    pub fn builder(code: ErrorCode, level: Severity) -> RecordBuilder {
        RecordBuilder {
            code,
            key: Cow::Borrowed(""),
            message: Cow::Borrowed(""),
            caller: None,
            level,
            once_only: false,
            retry: Tristate::Unknown,
            formal_cause: None,
            cause: Cause::None,
        }
    }

    /// Numeric code.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Translation key.
    #[inline]
    pub fn translation_key(&self) -> &str {
        &self.key
    }

    /// Rendered message, possibly empty.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the record was built.
    #[inline]
    pub const fn caller(&self) -> &Location {
        &self.caller
    }

    /// Severity.
    #[inline]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Whether the record aborts the request.
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        self.level.is_fatal()
    }

    /// Whether the record is an advisory warning.
    #[inline]
    pub const fn is_warning(&self) -> bool {
        self.level.is_warning()
    }

    /// Whether the record should be reported at most once per request.
    #[inline]
    pub const fn once_only(&self) -> bool {
        self.once_only
    }

    /// Advisory retry hint.
    #[inline]
    pub const fn retry(&self) -> Tristate {
        self.retry
    }

    /// Typed failure this record wraps.
    #[inline]
    pub const fn formal_cause(&self) -> Option<&FormalCause> {
        self.formal_cause.as_ref()
    }

    /// Informal diagnostic cause.
    #[inline]
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Replace the translation key.
    pub fn set_translation_key(&mut self, key: impl Into<Cow<'static, str>>) {
        self.key = key.into();
    }

    /// Replace the informal cause.
    pub fn set_cause(&mut self, cause: impl Into<Cause>) {
        self.cause = cause.into();
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    /// JSON mapping of this record, informal cause normalized.
    pub fn object(&self) -> serde_json::Value {
        RecordWire::from(self).into_value()
    }

    /// Compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Encode`] if serialization fails.
    pub fn to_json(&self) -> result::Result<String, WireError> {
        serde_json::to_string(self).map_err(WireError::Encode)
    }

    /// Rebuild a record from JSON text.
    ///
    /// The result is not identical to the record that was encoded: see
    /// [`wire`] for what is lost.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the text is not a record.
    pub fn from_json(text: &str) -> result::Result<Self, WireError> {
        serde_json::from_str(text).map_err(WireError::Decode)
    }

    // ------------------------------------------------------------------------
    // Chain searches
    // ------------------------------------------------------------------------

    /// Whether `text` appears in the rendered text or anywhere in the
    /// normalized informal chain. The formal chain is not walked.
    pub fn contains_text(&self, text: &str) -> bool {
        self.to_string().contains(text) || self.cause.mentions_text(text)
    }

    /// Whether this record or a node of its informal chain has `code`.
    ///
    /// Nodes are nested records, or maps whose `code` entry is an `I32` or
    /// a typed [`ErrorCode`]; a map continues through its `cause` entry.
    pub fn has_cause(&self, code: ErrorCode) -> bool {
        self.code == code || self.cause.mentions_code(code)
    }

    /// Whether this record or a record of its formal chain has `code`.
    /// A foreign link ends the walk.
    pub fn has_icause(&self, code: ErrorCode) -> bool {
        let mut current = Some(self);
        while let Some(record) = current {
            if record.code == code {
                return true;
            }
            current = record.formal_cause.as_ref().and_then(FormalCause::as_record);
        }
        false
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message.is_empty(), &self.formal_cause) {
            (false, Some(cause)) => write!(f, "{} - cause: {}", self.message, cause),
            (false, None) => f.write_str(&self.message),
            (true, Some(cause)) => fmt::Display::fmt(cause, f),
            (true, None) if !self.cause.is_none() => fmt::Display::fmt(&self.cause, f),
            (true, None) => f.write_str("Unspecified error."),
        }
    }
}

impl std::error::Error for ErrorRecord {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.formal_cause.as_ref().map(FormalCause::as_error)
    }
}

impl Serialize for ErrorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        RecordWire::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> result::Result<Self, D::Error> {
        RecordWire::deserialize(deserializer).map(RecordWire::into_record)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use std::error::Error as _;

    fn exception(code: ErrorCode, message: &'static str) -> RecordBuilder {
        ErrorRecord::builder(code, Severity::Exception).message(message)
    }

    #[test]
    fn display_priority_order() {
        let foreign = ForeignError::text("connection reset");

        let both = exception(definitions::E_INTERNAL, "fetch failed")
            .formal_cause(foreign.clone())
            .build();
        assert_eq!(both.to_string(), "fetch failed - cause: connection reset");

        let message_only = exception(definitions::E_INTERNAL, "fetch failed").build();
        assert_eq!(message_only.to_string(), "fetch failed");

        let formal_only = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
            .formal_cause(foreign)
            .build();
        assert_eq!(formal_only.to_string(), "connection reset");

        let informal_only = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
            .cause("disk full")
            .build();
        assert_eq!(informal_only.to_string(), "disk full");

        let empty = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception).build();
        assert_eq!(empty.to_string(), "Unspecified error.");
    }

    #[test]
    fn severity_flags() {
        let fatal = exception(definitions::E_INTERNAL, "x").build();
        assert!(fatal.is_fatal());
        assert!(!fatal.is_warning());

        let warn = ErrorRecord::builder(definitions::W_GENERIC, Severity::Warning).build();
        assert!(!warn.is_fatal());
        assert!(warn.is_warning());
    }

    #[test]
    fn builder_captures_call_site() {
        let line = line!() + 1;
        let err = exception(definitions::E_INTERNAL, "x").build();
        assert_eq!(err.caller().to_string(), format!("lib:{}", line));
    }

    #[test]
    fn setters_patch_key_and_cause_only() {
        let mut err = exception(definitions::E_CB_DML, "DML Error").key("old").build();
        err.set_translation_key("datastore.couchbase.DML_error");
        err.set_cause(Cause::structured([("request", "r-42")]));

        assert_eq!(err.translation_key(), "datastore.couchbase.DML_error");
        assert!(err.contains_text("r-42"));
        assert_eq!(err.code(), definitions::E_CB_DML);
        assert_eq!(err.message(), "DML Error");
    }

    #[test]
    fn has_cause_walks_informal_chain() {
        let a = exception(definitions::E_SUBQUERY_BUILD, "Unable to run subquery").build();
        let b = exception(definitions::E_EXECUTION_INTERNAL, "Execution internal error")
            .cause(a)
            .build();

        assert!(b.has_cause(definitions::E_EXECUTION_INTERNAL));
        assert!(b.has_cause(definitions::E_SUBQUERY_BUILD));
        assert!(!b.has_cause(ErrorCode::new(9999)));
    }

    #[test]
    fn has_cause_ignores_formal_chain() {
        let a = exception(definitions::E_SUBQUERY_BUILD, "inner").build();
        let b = exception(definitions::E_EXECUTION_INTERNAL, "outer")
            .formal_cause(a)
            .build();
        assert!(!b.has_cause(definitions::E_SUBQUERY_BUILD));
        assert!(b.has_icause(definitions::E_SUBQUERY_BUILD));
    }

    #[test]
    fn has_icause_stops_at_foreign_link() {
        let deepest = exception(definitions::E_KEY_NOT_FOUND, "deep").build();
        let middle = exception(definitions::E_INTERNAL, "middle")
            .formal_cause(ForeignError::text("io"))
            .cause(deepest)
            .build();
        let top = exception(definitions::E_EXECUTION_INTERNAL, "top")
            .formal_cause(middle)
            .build();

        assert!(top.has_icause(definitions::E_INTERNAL));
        assert!(!top.has_icause(definitions::E_KEY_NOT_FOUND));
    }

    #[test]
    fn contains_text_walks_nested_informal_nodes() {
        let middle = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
            .message("middle")
            .cause(Cause::structured([("note", "haystack")]))
            .build();
        let top = exception(definitions::E_EXECUTION_INTERNAL, "top")
            .cause(middle)
            .build();

        assert!(top.contains_text("top"));
        assert!(top.contains_text("haystack"));
        assert!(top.contains_text("middle"));
        assert!(!top.contains_text("needle"));
    }

    #[test]
    fn object_includes_optional_fields_when_set() {
        let err = exception(definitions::E_CB_DML, "DML Error")
            .formal_cause(ForeignError::text("CAS mismatch"))
            .retry(true)
            .cause(Cause::structured([("key", "k1")]))
            .at(Location::new("ds_couchbase", 10))
            .build();
        let obj = err.object();

        assert_eq!(obj["code"], 12009);
        assert_eq!(obj["icause"], "CAS mismatch");
        assert_eq!(obj["retry"], true);
        assert_eq!(obj["cause"]["key"], "k1");
        assert_eq!(obj["caller"], "ds_couchbase:10");
    }

    #[test]
    fn json_round_trip_is_documented_lossy() {
        let inner = exception(definitions::E_KEY_NOT_FOUND, "Key not found").build();
        let err = exception(definitions::E_EXECUTION_INTERNAL, "outer")
            .key("execution.internal_error")
            .formal_cause(inner)
            .retry(false)
            .build();

        let decoded = ErrorRecord::from_json(&err.to_json().unwrap()).unwrap();
        assert_eq!(decoded.code(), err.code());
        assert_eq!(decoded.translation_key(), err.translation_key());
        assert_eq!(decoded.message(), err.message());
        assert_eq!(decoded.caller(), err.caller());
        assert_eq!(decoded.retry(), Tristate::No);
        assert_eq!(decoded.to_string(), err.to_string());

        // The formal chain is flattened to text.
        assert!(matches!(decoded.formal_cause(), Some(FormalCause::Foreign(_))));
        assert!(!decoded.has_icause(definitions::E_KEY_NOT_FOUND));
    }

    #[test]
    fn source_follows_formal_cause() {
        let io = std::io::Error::other("socket closed");
        let err = exception(definitions::E_INTERNAL, "read failed")
            .formal_cause(io)
            .build();
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("socket closed"));

        let bare = exception(definitions::E_INTERNAL, "x").build();
        assert!(bare.source().is_none());
    }
}
