//! Convenience macros for declaring codes and building records.
//!
//! # Rules
//!
//! 1. **Codes are declared once** through [`define_error_codes!`], which
//!    range-checks them at compile time.
//! 2. **Translation keys MUST be string literals** so they stay greppable
//!    and stable across releases.
//! 3. **Messages use `format!` syntax** and are rendered at the call site;
//!    the record's caller location is the macro invocation.
//!
//! # Usage
//!
//! ```rust
//! # use query_errors::{exception, warning, definitions};
//! let keyspace = "travel-sample";
//! let err = exception!(
//!     definitions::E_AUS_EVALUATION_PHASE,
//!     "aus.evaluation_phase",
//!     "Auto Update Statistics task's Evaluation phase for {} encountered an error.",
//!     keyspace
//! );
//! assert!(err.is_fatal());
//! assert!(err.message().contains("travel-sample"));
//!
//! let warn = warning!(definitions::W_GENERIC, "plan.generic", "Index hint ignored");
//! assert!(warn.is_warning());
//! ```
//!
//! ```rust,compile_fail
//! # use query_errors::{exception, definitions};
//! let key = String::from("dynamic.key");
//! // ✗ COMPILE ERROR: translation key must be a literal
//! let err = exception!(definitions::E_INTERNAL, key, "boom");
//! ```

/// Define a single error code constant pinned to a subsystem.
///
/// The range check runs in a const context, so a value outside the
/// subsystem's range fails the build.
#[macro_export]
macro_rules! define_error_code {
    ($name:ident, $subsystem:expr, $code:expr) => {
        #[doc = concat!("Error code ", stringify!($code), ".")]
        pub const $name: $crate::ErrorCode = $crate::ErrorCode::const_new($subsystem, $code);
    };
}

/// Define a batch of error codes for one subsystem, plus a registry slice.
///
/// ```rust
/// # use query_errors::{define_error_codes, Subsystem};
/// define_error_codes! {
///     Subsystem::Sequences, SEQ_CODES => {
///         E_SEQ_EXAMPLE = 19190,
///         E_SEQ_OTHER   = 19191,
///     }
/// }
/// assert_eq!(SEQ_CODES[1], ("E_SEQ_OTHER", E_SEQ_OTHER));
/// ```
#[macro_export]
macro_rules! define_error_codes {
    ($subsystem:expr, $registry:ident => { $( $name:ident = $code:expr ),+ $(,)? }) => {
        $(
            $crate::define_error_code!($name, $subsystem, $code);
        )+

        #[doc = concat!("Registry of every code declared alongside `", stringify!($registry), "`.")]
        pub const $registry: &[(&str, $crate::ErrorCode)] = &[
            $( (stringify!($name), $name), )+
        ];
    };
}

/// Build an `EXCEPTION` record with a formatted message.
///
/// An optional `cause = expr;` prefix attaches a formal cause.
#[macro_export]
macro_rules! exception {
    (cause = $cause:expr; $code:expr, $key:literal, $($fmt:tt)+) => {
        $crate::ErrorRecord::builder($code, $crate::Severity::Exception)
            .key($key)
            .message(format!($($fmt)+))
            .formal_cause($cause)
            .build()
    };
    ($code:expr, $key:literal, $($fmt:tt)+) => {
        $crate::ErrorRecord::builder($code, $crate::Severity::Exception)
            .key($key)
            .message(format!($($fmt)+))
            .build()
    };
}

/// Build a `WARNING` record with a formatted message.
#[macro_export]
macro_rules! warning {
    ($code:expr, $key:literal, $($fmt:tt)+) => {
        $crate::ErrorRecord::builder($code, $crate::Severity::Warning)
            .key($key)
            .message(format!($($fmt)+))
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::{definitions, ErrorRecord, FormalCause, Severity};

    #[test]
    fn exception_macro_formats_message() {
        let err = exception!(
            definitions::E_DUPLICATE_KEY,
            "datastore.duplicate_key",
            "Duplicate Key {}",
            "airline_10"
        );
        assert_eq!(err.message(), "Duplicate Key airline_10");
        assert_eq!(err.translation_key(), "datastore.duplicate_key");
        assert_eq!(err.level(), Severity::Exception);
    }

    #[test]
    fn exception_macro_attaches_formal_cause() {
        let inner = ErrorRecord::builder(definitions::E_KEY_NOT_FOUND, Severity::Exception)
            .message("Key not found")
            .build();
        let err = exception!(
            cause = inner;
            definitions::E_EXECUTION_INTERNAL,
            "execution.internal",
            "Execution internal error: {}",
            "fetch"
        );
        assert!(matches!(err.formal_cause(), Some(FormalCause::Record(_))));
        assert!(err.has_icause(definitions::E_KEY_NOT_FOUND));
    }

    #[test]
    fn macros_record_their_call_site() {
        let line = line!() + 1;
        let err = warning!(definitions::W_GENERIC, "plan.generic", "careful");
        assert_eq!(err.caller().line(), line);
        assert_eq!(err.caller().file(), "convenience");
    }
}
