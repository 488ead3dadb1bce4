//! Typed builders for frequently raised records.
//!
//! Each builder has a fixed parameter list and reports the location of its
//! own caller. The code passed to the record is always assigned; a zero code
//! is a programming error caught in debug builds.

use crate::definitions::*;
use crate::{Cause, CauseMap, CauseValue, ErrorCode, ErrorRecord, FormalCause, Severity, Tristate};
use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

const AUS_SCHEMA_MESSAGE: &str =
    "Invalid schema or semantics detected in the Auto Update Statistics settings document.";

#[track_caller]
fn exception(code: ErrorCode, key: &'static str) -> crate::RecordBuilder {
    debug_assert!(code.is_assigned(), "records must carry an assigned code");
    ErrorRecord::builder(code, Severity::Exception).key(key)
}

/// Wrap an arbitrary failure as an internal error.
///
/// A record is returned unchanged; anything else becomes an `E_INTERNAL`
/// exception with the failure as its formal cause.
///
/// ```rust
/// # use query_errors::{definitions, new_error, ForeignError};
/// let err = new_error(ForeignError::text("socket closed"), "reading response");
/// assert_eq!(err.code(), definitions::E_INTERNAL);
/// assert_eq!(err.to_string(), "reading response - cause: socket closed");
/// ```
#[track_caller]
pub fn new_error(cause: impl Into<FormalCause>, message: impl Into<Cow<'static, str>>) -> ErrorRecord {
    match cause.into() {
        FormalCause::Record(record) => *record,
        foreign => exception(E_INTERNAL, "Internal Error")
            .message(message)
            .formal_cause(foreign)
            .build(),
    }
}

/// Generic advisory warning.
#[track_caller]
pub fn new_warning(message: impl Into<Cow<'static, str>>) -> ErrorRecord {
    ErrorRecord::builder(W_GENERIC, Severity::Warning)
        .key("plan.generic_warning")
        .message(message)
        .build()
}

/// Unexpected state inside the execution engine.
#[track_caller]
pub fn new_execution_internal_error(what: &str) -> ErrorRecord {
    exception(E_EXECUTION_INTERNAL, "execution.internal_error")
        .message(format!("Execution internal error: {}", what))
        .build()
}

/// Rebuilding a subquery's execution tree failed.
#[track_caller]
pub fn new_subquery_build_error(cause: impl Into<FormalCause>) -> ErrorRecord {
    exception(E_SUBQUERY_BUILD, "execution.subquery.build")
        .message("Unable to run subquery")
        .formal_cause(cause)
        .build()
}

/// DML failure reported by the document store.
///
/// When `cas_mismatch` is set the message names the CAS mismatch and the
/// record is marked retryable: a concurrent writer won the race and
/// resubmitting may succeed.
#[track_caller]
pub fn new_cb_dml_error(
    cause: impl Into<FormalCause>,
    op: &str,
    key: &str,
    cas_mismatch: bool,
) -> ErrorRecord {
    let message = if cas_mismatch {
        format!(
            "DML Error, possible causes include CAS mismatch or concurrent modification. Failed to perform {} on key {}",
            op, key
        )
    } else {
        format!("DML Error. Failed to perform {} on key {}", op, key)
    };
    exception(E_CB_DML, "datastore.couchbase.DML_error")
        .message(message)
        .formal_cause(cause)
        .retry(if cas_mismatch { Tristate::Yes } else { Tristate::Unknown })
        .build()
}

/// Concurrent update detected on `key`; normally embedded in a DML error.
#[track_caller]
pub fn new_cas_mismatch(op: &str, key: &str) -> ErrorRecord {
    exception(E_CAS_MISMATCH, "datastore.couchbase.cas_mismatch")
        .message(format!("CAS mismatch performing {} on key {}", op, key))
        .cause(Cause::structured([("op", op), ("key", key)]))
        .build()
}

/// Insert of a key that already exists in the transaction.
#[track_caller]
pub fn new_duplicate_key_error(key: &str) -> ErrorRecord {
    exception(E_DUPLICATE_KEY, "transaction.statement.duplicatekey")
        .message(format!("Duplicate Key: {}", key))
        .build()
}

/// Key missing from the transaction's view.
#[track_caller]
pub fn new_key_not_found_error(key: &str) -> ErrorRecord {
    exception(E_KEY_NOT_FOUND, "transaction.statement.keynotfound")
        .message(format!("Key not found : {}", key))
        .build()
}

/// Warning raised when a remote node drops out during a fan-out read.
#[track_caller]
pub fn new_remote_node_not_found_warning(node: &str) -> ErrorRecord {
    ErrorRecord::builder(W_SYSTEM_REMOTE_NODE_NOT_FOUND, Severity::Warning)
        .key("system.remote.node_not_found")
        .message(format!("Node {} not found", node))
        .build()
}

/// Reading or writing Auto Update Statistics state failed.
#[track_caller]
pub fn new_aus_storage_access_error(cause: impl Into<Cause>) -> ErrorRecord {
    exception(E_AUS_STORAGE, "aus.storage.error")
        .message("Error accessing Auto Update Statistics information from storage.")
        .cause(cause)
        .build()
}

/// Settings document value of the wrong type or out of bounds.
///
/// The informal cause carries `cause` and, for settings with a documented
/// shape, `help`.
#[track_caller]
pub fn new_aus_doc_invalid_settings_value<V: fmt::Display>(setting: &str, value: V) -> ErrorRecord {
    let mut cause = CauseMap::new();
    cause.insert(
        "cause".to_owned(),
        CauseValue::Text(format!(
            "Invalid value '{}' ({}) for setting '{}'",
            value,
            type_name::<V>(),
            setting
        )),
    );
    if let Some(help) = schema_help(setting) {
        cause.insert("help".to_owned(), CauseValue::Text(help));
    }
    exception(E_AUS_INVALID_DOCUMENT_SCHEMA, "aus.settings.invalid_schema")
        .message(AUS_SCHEMA_MESSAGE)
        .cause(cause)
        .build()
}

/// Required setting absent from the settings document.
///
/// With a `default`, the informal cause records the value that was
/// substituted under `default_action_taken`.
#[track_caller]
pub fn new_aus_doc_missing_setting(setting: &str, default: Option<&dyn fmt::Display>) -> ErrorRecord {
    let mut cause = CauseMap::new();
    cause.insert(
        "cause".to_owned(),
        CauseValue::Text(format!(
            "Setting '{}' cannot be missing in the Auto Update Statistics settings document.",
            setting
        )),
    );
    if let Some(help) = schema_help(setting) {
        cause.insert("help".to_owned(), CauseValue::Text(help));
    }
    if let Some(default) = default {
        cause.insert(
            "default_action_taken".to_owned(),
            CauseValue::Text(format!("'{}' set to default value of: {}", setting, default)),
        );
    }
    exception(E_AUS_INVALID_DOCUMENT_SCHEMA, "aus.settings.invalid_schema")
        .message(AUS_SCHEMA_MESSAGE)
        .cause(cause)
        .build()
}

/// Settings document could not be encoded or decoded.
#[track_caller]
pub fn new_aus_doc_encoding_error(is_encode: bool, cause: impl Into<FormalCause>) -> ErrorRecord {
    let action = if is_encode { "encoding" } else { "decoding" };
    exception(E_AUS_SETTINGS_ENCODING, "aus.settings.encoding_error")
        .message(format!(
            "Error {} Automatic Update Statistics settings document.",
            action
        ))
        .formal_cause(cause)
        .build()
}

fn schema_help(setting: &str) -> Option<String> {
    let help = match setting {
        "change_percentage" => "Integer between 0 and 100.",
        "schedule.start_time" | "schedule.end_time" => "Valid timestamp in HH:MM:SS format.",
        "schedule.timezone" => "UTC or IANA timezone.",
        "schedule.days" => "List of text string names of the days of the week.",
        "enable" | "all_buckets" => "boolean.",
        _ => return None,
    };
    Some(format!("Setting '{}' must be: {}", setting, help))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForeignError;

    #[test]
    fn new_error_passes_records_through() {
        let original = new_key_not_found_error("airline_10");
        let wrapped = new_error(original.clone(), "ignored");
        assert_eq!(wrapped.code(), E_KEY_NOT_FOUND);
        assert_eq!(wrapped.message(), original.message());
        assert_eq!(wrapped.caller(), original.caller());
    }

    #[test]
    fn new_error_wraps_foreign_failures() {
        let line = line!() + 1;
        let err = new_error(std::io::Error::other("disk full"), "writing spill file");
        assert_eq!(err.code(), E_INTERNAL);
        assert_eq!(err.translation_key(), "Internal Error");
        assert_eq!(err.to_string(), "writing spill file - cause: disk full");
        assert_eq!(err.caller().line(), line);
        assert_eq!(err.caller().file(), "factories");
    }

    #[test]
    fn warning_is_not_fatal() {
        let warn = new_warning("Index hint ignored");
        assert!(warn.is_warning());
        assert!(!warn.is_fatal());
        assert_eq!(warn.code(), W_GENERIC);

        let node = new_remote_node_not_found_warning("10.0.0.7:8091");
        assert!(node.is_warning());
        assert_eq!(node.message(), "Node 10.0.0.7:8091 not found");
    }

    #[test]
    fn cas_mismatch_dml_error_is_retryable() {
        let err = new_cb_dml_error(
            new_cas_mismatch("UPSERT", "k1"),
            "UPSERT",
            "k1",
            true,
        );
        assert_eq!(err.code().value(), 12009);
        assert!(err.message().contains("CAS mismatch"));
        assert_eq!(err.retry(), Tristate::Yes);
        assert!(err.has_icause(E_CAS_MISMATCH));
        assert_eq!(err.object()["retry"], true);

        let plain = new_cb_dml_error(ForeignError::text("timeout"), "DELETE", "k2", false);
        assert!(!plain.message().contains("CAS mismatch"));
        assert_eq!(plain.retry(), Tristate::Unknown);
        assert!(plain.object().get("retry").is_none());
    }

    #[test]
    fn subquery_failure_inside_execution_error() {
        let mut outer = new_execution_internal_error("subquery");
        outer.set_cause(new_subquery_build_error(ForeignError::text("plan missing")));

        assert!(outer.has_cause(E_SUBQUERY_BUILD));
        assert!(!outer.has_cause(ErrorCode::new(9999)));
        assert!(outer.contains_text("plan missing"));
    }

    #[test]
    fn aus_invalid_value_includes_help_when_known() {
        let err = new_aus_doc_invalid_settings_value("change_percentage", 250);
        let object = err.object();
        let cause = &object["cause"];
        assert_eq!(
            cause["cause"],
            "Invalid value '250' (i32) for setting 'change_percentage'"
        );
        assert_eq!(
            cause["help"],
            "Setting 'change_percentage' must be: Integer between 0 and 100."
        );

        let unknown = new_aus_doc_invalid_settings_value("colour", "blue");
        assert!(unknown.object()["cause"].get("help").is_none());
    }

    #[test]
    fn aus_missing_setting_records_default() {
        let err = new_aus_doc_missing_setting("enable", Some(&false));
        let object = err.object();
        let cause = &object["cause"];
        assert_eq!(cause["default_action_taken"], "'enable' set to default value of: false");
        assert_eq!(cause["help"], "Setting 'enable' must be: boolean.");

        let bare = new_aus_doc_missing_setting("schedule", None);
        assert!(bare.object()["cause"].get("default_action_taken").is_none());
    }

    #[test]
    fn aus_storage_and_encoding_errors() {
        let storage = new_aus_storage_access_error("bucket unavailable");
        assert_eq!(storage.code(), E_AUS_STORAGE);
        assert!(storage.contains_text("bucket unavailable"));
        assert!(storage.formal_cause().is_none());

        let encode = new_aus_doc_encoding_error(true, ForeignError::text("bad utf-8"));
        assert_eq!(
            encode.to_string(),
            "Error encoding Automatic Update Statistics settings document. - cause: bad utf-8"
        );
        let decode = new_aus_doc_encoding_error(false, ForeignError::text("eof"));
        assert!(decode.message().starts_with("Error decoding"));
    }

    #[test]
    fn duplicate_key_message() {
        let err = new_duplicate_key_error("airline_10");
        assert_eq!(err.message(), "Duplicate Key: airline_10");
        assert_eq!(err.code().value(), 17012);
    }
}
