//! Small classification enums shared by records and catalog entries.

use std::fmt;

// ============================================================================
// Severity
// ============================================================================

/// How serious a record is.
///
/// Variants are ordered from most to least severe, so `a < b` means `a` is
/// worse than `b`. Only [`Severity::Exception`] aborts a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Fatal for the request.
    Exception,
    /// Failure reported without aborting.
    Error,
    /// Advisory, non-fatal.
    Warning,
    /// Informational notice returned to the client.
    Notice,
    /// Informational.
    Info,
    /// Log-only detail.
    Log,
    /// Debug-only detail.
    Debug,
}

impl Severity {
    /// Stable upper-case name.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Exception => "EXCEPTION",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Log => "LOG",
            Self::Debug => "DEBUG",
        }
    }

    /// Whether this severity aborts the request.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Exception)
    }

    /// Whether this is an advisory warning.
    #[inline]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Level used when the record is emitted through `tracing`.
    #[inline]
    pub const fn tracing_level(self) -> tracing::Level {
        match self {
            Self::Exception | Self::Error => tracing::Level::ERROR,
            Self::Warning => tracing::Level::WARN,
            Self::Notice | Self::Info => tracing::Level::INFO,
            Self::Log => tracing::Level::DEBUG,
            Self::Debug => tracing::Level::TRACE,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Tristate
// ============================================================================

/// Three-valued flag; used for the advisory retry hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tristate {
    /// Not stated.
    #[default]
    Unknown,
    /// Affirmative.
    Yes,
    /// Negative.
    No,
}

impl Tristate {
    /// `None` for `Unknown`, otherwise the boolean value.
    #[inline]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }

    /// Whether a value has been stated.
    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<bool> for Tristate {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<Option<bool>> for Tristate {
    #[inline]
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

// ============================================================================
// User classification
// ============================================================================

/// Whether a catalogued failure is caused by the user's own request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserClassification {
    /// A system-side failure.
    #[default]
    No,
    /// Either, depending on circumstances.
    Maybe,
    /// Caused by the request.
    Yes,
}

impl UserClassification {
    /// Label used in the catalog entry JSON; `None` for [`UserClassification::No`].
    #[inline]
    pub const fn wire_label(self) -> Option<&'static str> {
        match self {
            Self::No => None,
            Self::Maybe => Some("Possibly"),
            Self::Yes => Some("Yes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exception_is_fatal() {
        for severity in [
            Severity::Error,
            Severity::Warning,
            Severity::Notice,
            Severity::Info,
            Severity::Log,
            Severity::Debug,
        ] {
            assert!(!severity.is_fatal(), "{} must not be fatal", severity);
        }
        assert!(Severity::Exception.is_fatal());
        assert!(!Severity::Exception.is_warning());
        assert!(Severity::Warning.is_warning());
    }

    #[test]
    fn severity_orders_worst_first() {
        assert!(Severity::Exception < Severity::Error);
        assert!(Severity::Warning < Severity::Notice);
        assert!(Severity::Log < Severity::Debug);
    }

    #[test]
    fn severity_maps_to_tracing_levels() {
        assert_eq!(Severity::Exception.tracing_level(), tracing::Level::ERROR);
        assert_eq!(Severity::Warning.tracing_level(), tracing::Level::WARN);
        assert_eq!(Severity::Notice.tracing_level(), tracing::Level::INFO);
        assert_eq!(Severity::Debug.tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn tristate_conversions() {
        assert_eq!(Tristate::from(true), Tristate::Yes);
        assert_eq!(Tristate::from(None), Tristate::Unknown);
        assert_eq!(Tristate::No.as_bool(), Some(false));
        assert!(!Tristate::default().is_known());
    }

    #[test]
    fn user_classification_labels() {
        assert_eq!(UserClassification::Yes.wire_label(), Some("Yes"));
        assert_eq!(UserClassification::Maybe.wire_label(), Some("Possibly"));
        assert_eq!(UserClassification::No.wire_label(), None);
    }
}
