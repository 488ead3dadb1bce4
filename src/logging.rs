//! Structured log view of a record.
//!
//! # Properties
//!
//! - Borrows from the [`ErrorRecord`] with an explicit lifetime
//! - CANNOT outlive the record that created it
//! - Caller and causes are rendered once, when the view is built
//! - Accessors return borrowed data and never allocate
//! - Every field is bounded to `MAX_FIELD_OUTPUT_LEN` bytes when formatted
//!
//! [`RecordLog::emit`] sends the record through `tracing` at the level its
//! severity maps to; [`RecordLog::write_to`] renders a single bounded line
//! for sinks that want text.

use crate::{ErrorCode, ErrorRecord, Severity, Tristate};
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log entry with borrowed data from an [`ErrorRecord`].
///
/// # Example
///
/// ```rust
/// # use query_errors::{definitions, ErrorRecord, Severity};
/// let err = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
///     .message("boom")
///     .build();
/// let mut line = String::new();
/// err.log_entry().write_to(&mut line).unwrap();
/// assert!(line.starts_with("[5000] EXCEPTION"));
/// ```
#[derive(Debug)]
pub struct RecordLog<'a> {
    record: &'a ErrorRecord,
    caller: String,
    formal_cause: Option<String>,
    cause: Option<String>,
}

impl ErrorRecord {
    /// Borrowed log view of this record. Renders the caller and any causes
    /// into owned strings up front.
    pub fn log_entry(&self) -> RecordLog<'_> {
        RecordLog {
            record: self,
            caller: self.caller().to_string(),
            formal_cause: self.formal_cause().map(|c| c.to_string()),
            cause: (!self.cause().is_none()).then(|| self.cause().to_string()),
        }
    }

    /// Emit this record through `tracing`.
    pub fn log(&self) {
        self.log_entry().emit();
    }
}

impl<'a> RecordLog<'a> {
    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// Fields are not truncated. Only available with BOTH the
    /// `trusted_debug` feature AND debug assertions enabled.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = format!(
            "[{}] {}{} key='{}' message='{}' caller='{}'",
            self.code(),
            self.severity(),
            retry_marker(self.retry()),
            self.translation_key(),
            self.message(),
            self.caller
        );
        if let Some(formal) = &self.formal_cause {
            output.push_str(&format!(" icause='{}'", formal));
        }
        if let Some(cause) = &self.cause {
            output.push_str(&format!(" cause='{}'", cause));
        }
        output
    }

    /// Write the entry as one line, each field truncated.
    ///
    /// ```text
    /// [12009] EXCEPTION [RETRY] key='...' message='...' caller='stem:line' icause='...' cause='...'
    /// ```
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] {}{} key='{}' message='{}' caller='{}'",
            self.code(),
            self.severity(),
            retry_marker(self.retry()),
            truncate_with_indicator(self.translation_key()),
            truncate_with_indicator(self.message()),
            truncate_with_indicator(&self.caller)
        )?;

        if let Some(formal) = &self.formal_cause {
            write!(f, " icause='{}'", truncate_with_indicator(formal))?;
        }

        if let Some(cause) = &self.cause {
            write!(f, " cause='{}'", truncate_with_indicator(cause))?;
        }

        Ok(())
    }

    /// Send the entry to the active `tracing` subscriber.
    pub fn emit(&self) {
        let code = self.code().value();
        let key = self.translation_key();
        let caller = self.caller.as_str();
        let severity = self.severity();
        let retry = self.retry().as_bool();
        let once_only = self.record.once_only();
        let message = truncate_with_indicator(self.message());
        let icause = self.formal_cause.as_deref().map(truncate_with_indicator);
        let cause = self.cause.as_deref().map(truncate_with_indicator);

        macro_rules! emit_at {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    code,
                    key,
                    caller,
                    severity = %severity,
                    retry = ?retry,
                    once_only,
                    icause = icause.as_deref(),
                    cause = cause.as_deref(),
                    "{}",
                    message
                )
            };
        }

        // `event!` needs a constant level.
        let level = self.severity().tracing_level();
        if level == tracing::Level::ERROR {
            emit_at!(tracing::Level::ERROR);
        } else if level == tracing::Level::WARN {
            emit_at!(tracing::Level::WARN);
        } else if level == tracing::Level::INFO {
            emit_at!(tracing::Level::INFO);
        } else if level == tracing::Level::DEBUG {
            emit_at!(tracing::Level::DEBUG);
        } else {
            emit_at!(tracing::Level::TRACE);
        }
    }

    /// Record code.
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.record.code()
    }

    /// Translation key.
    #[inline]
    pub fn translation_key(&self) -> &'a str {
        self.record.translation_key()
    }

    /// Rendered message, untruncated.
    #[inline]
    pub fn message(&self) -> &'a str {
        self.record.message()
    }

    /// Rendered caller location.
    #[inline]
    pub fn caller(&self) -> &str {
        &self.caller
    }

    /// Severity.
    #[inline]
    pub fn severity(&self) -> Severity {
        self.record.level()
    }

    /// Retry hint.
    #[inline]
    pub fn retry(&self) -> Tristate {
        self.record.retry()
    }

    /// Rendered formal cause, untruncated.
    #[inline]
    pub fn formal_cause(&self) -> Option<&str> {
        self.formal_cause.as_deref()
    }

    /// Rendered informal cause, untruncated.
    #[inline]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

fn retry_marker(retry: Tristate) -> &'static str {
    match retry {
        Tristate::Yes => " [RETRY]",
        Tristate::No => " [NO-RETRY]",
        Tristate::Unknown => "",
    }
}

/// Truncate a string for display.
///
/// If the string exceeds MAX_FIELD_OUTPUT_LEN, it's truncated with an indicator
/// to make the truncation visible to operators.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last char boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{definitions, Cause, ForeignError, Location};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 10);
        let truncated = truncate_with_indicator(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let s = "short string";
        let truncated = truncate_with_indicator(s);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, s);
    }

    #[test]
    fn truncate_utf8_boundary() {
        // 2 bytes per char
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_emoji() {
        let s = "🔥".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn write_to_renders_all_present_fields() {
        let err = ErrorRecord::builder(definitions::E_CB_DML, Severity::Exception)
            .key("datastore.couchbase.DML_error")
            .message("DML Error")
            .formal_cause(ForeignError::text("CAS mismatch"))
            .cause(Cause::structured([("key", "k1")]))
            .retry(true)
            .at(Location::new("ds_couchbase", 88))
            .build();

        let mut line = String::new();
        err.log_entry().write_to(&mut line).unwrap();
        assert_eq!(
            line,
            "[12009] EXCEPTION [RETRY] key='datastore.couchbase.DML_error' message='DML Error' \
             caller='ds_couchbase:88' icause='CAS mismatch' cause='{\"key\":\"k1\"}'"
        );
    }

    #[test]
    fn write_to_bounds_huge_messages() {
        let err = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
            .message("x".repeat(50_000))
            .build();
        let mut line = String::new();
        err.log_entry().write_to(&mut line).unwrap();
        assert!(line.len() < 2 * MAX_FIELD_OUTPUT_LEN);
        assert!(line.contains(TRUNCATION_INDICATOR));
    }

    #[test]
    fn accessors_borrow_prerendered_fields() {
        let err = ErrorRecord::builder(definitions::E_CB_DML, Severity::Exception)
            .message("DML Error")
            .formal_cause(ForeignError::text("CAS mismatch"))
            .cause(Cause::structured([("key", "k1")]))
            .at(Location::new("ds_couchbase", 88))
            .build();
        let entry = err.log_entry();

        assert_eq!(entry.caller(), "ds_couchbase:88");
        assert_eq!(entry.formal_cause(), Some("CAS mismatch"));
        assert_eq!(entry.cause(), Some("{\"key\":\"k1\"}"));
        assert!(std::ptr::eq(entry.caller(), entry.caller()));
        assert!(std::ptr::eq(entry.cause().unwrap(), entry.cause().unwrap()));
        assert!(std::ptr::eq(entry.message(), err.message()));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Captured {
        type Writer = Captured;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let sink = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn emit_uses_severity_level() {
        let warn = ErrorRecord::builder(definitions::W_GENERIC, Severity::Warning)
            .message("index hint ignored")
            .build();
        let output = capture(|| warn.log());
        assert!(output.contains("WARN"));
        assert!(output.contains("index hint ignored"));
        assert!(output.contains("code=4999"));

        let fatal = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
            .message("boom")
            .build();
        let output = capture(|| fatal.log());
        assert!(output.contains("ERROR"));
        assert!(output.contains("severity=EXCEPTION"));
    }
}
