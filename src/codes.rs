//! Error code space, partitioned into fixed subsystem ranges.
//!
//! An [`ErrorCode`] is a plain 32-bit number on the wire. Inside the crate
//! every named code is declared through [`define_error_codes!`], which pins
//! it to a [`Subsystem`] and rejects out-of-range values at compile time.
//!
//! # Ranges
//!
//! | Range         | Subsystem                 |
//! |---------------|---------------------------|
//! | 100-999       | `Shell`                   |
//! | 1000-1999     | `Service`                 |
//! | 2000-2999     | `Admin`                   |
//! | 3000-3999     | `Semantics`               |
//! | 4000-4999     | `Plan`                    |
//! | 5000-5999     | `Execution`               |
//! | 6000-6999     | `Scheduler`               |
//! | 7000-9999     | `Tooling`                 |
//! | 10000-10999   | `Feature`                 |
//! | 11000-11999   | `SystemDatastore`         |
//! | 12000-13999   | `CouchbaseDatastore`      |
//! | 14000-14999   | `IndexScan`               |
//! | 15000-15999   | `FileDatastore`           |
//! | 16000-16999   | `OtherDatastore`          |
//! | 17000-17999   | `Transactions`            |
//! | 18000-18999   | `Dictionary`              |
//! | 19000-19099   | `Virtual`                 |
//! | 19100-19199   | `Sequences`               |
//! | 19200-19999   | `NaturalLanguage`         |
//! | 20000-20999   | `Aus`                     |
//!
//! # Example
//!
//! ```rust
//! use query_errors::{define_error_codes, ErrorCode, Subsystem};
//!
//! define_error_codes! {
//!     Subsystem::Execution, LOCAL_CODES => {
//!         E_LOCAL_FAILURE = 5990,
//!     }
//! }
//!
//! assert_eq!(E_LOCAL_FAILURE.to_string(), "5990");
//! assert_eq!(E_LOCAL_FAILURE.subsystem(), Some(Subsystem::Execution));
//! assert_eq!(LOCAL_CODES.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Subsystem ranges
// ============================================================================

/// The owner of a numeric code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subsystem {
    /// Interactive shell and client tooling.
    Shell,
    /// Request service layer.
    Service,
    /// Admin endpoints, clustering and accounting.
    Admin,
    /// Parser and semantic checks.
    Semantics,
    /// Planner and prepared statements.
    Plan,
    /// Execution operators.
    Execution,
    /// Scheduler and statement rewrite.
    Scheduler,
    /// Schema inference, migration and backup tooling.
    Tooling,
    /// Cross-cutting features: authorization, functions, advisor.
    Feature,
    /// System keyspaces.
    SystemDatastore,
    /// Primary key-value datastore.
    CouchbaseDatastore,
    /// Index scans.
    IndexScan,
    /// File-backed datastore.
    FileDatastore,
    /// Other datastores.
    OtherDatastore,
    /// Transactions.
    Transactions,
    /// Statistics dictionary.
    Dictionary,
    /// Virtual keyspaces.
    Virtual,
    /// Sequences.
    Sequences,
    /// Natural language requests.
    NaturalLanguage,
    /// Auto update statistics.
    Aus,
}

impl Subsystem {
    /// All subsystems in ascending range order.
    pub const ALL: [Subsystem; 20] = [
        Self::Shell,
        Self::Service,
        Self::Admin,
        Self::Semantics,
        Self::Plan,
        Self::Execution,
        Self::Scheduler,
        Self::Tooling,
        Self::Feature,
        Self::SystemDatastore,
        Self::CouchbaseDatastore,
        Self::IndexScan,
        Self::FileDatastore,
        Self::OtherDatastore,
        Self::Transactions,
        Self::Dictionary,
        Self::Virtual,
        Self::Sequences,
        Self::NaturalLanguage,
        Self::Aus,
    ];

    /// Inclusive `(start, end)` bounds of the range.
    #[inline]
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::Shell => (100, 999),
            Self::Service => (1000, 1999),
            Self::Admin => (2000, 2999),
            Self::Semantics => (3000, 3999),
            Self::Plan => (4000, 4999),
            Self::Execution => (5000, 5999),
            Self::Scheduler => (6000, 6999),
            Self::Tooling => (7000, 9999),
            Self::Feature => (10000, 10999),
            Self::SystemDatastore => (11000, 11999),
            Self::CouchbaseDatastore => (12000, 13999),
            Self::IndexScan => (14000, 14999),
            Self::FileDatastore => (15000, 15999),
            Self::OtherDatastore => (16000, 16999),
            Self::Transactions => (17000, 17999),
            Self::Dictionary => (18000, 18999),
            Self::Virtual => (19000, 19099),
            Self::Sequences => (19100, 19199),
            Self::NaturalLanguage => (19200, 19999),
            Self::Aus => (20000, 20999),
        }
    }

    /// Whether `code` falls inside this subsystem's range.
    #[inline]
    pub const fn contains(self, code: i32) -> bool {
        let (start, end) = self.range();
        code >= start && code <= end
    }

    /// Find the subsystem owning `code`, if any.
    pub const fn for_code(code: i32) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].contains(code) {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Human-readable name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Shell => "Shell",
            Self::Service => "Service",
            Self::Admin => "Admin",
            Self::Semantics => "Semantics",
            Self::Plan => "Plan",
            Self::Execution => "Execution",
            Self::Scheduler => "Scheduler",
            Self::Tooling => "Tooling",
            Self::Feature => "Feature",
            Self::SystemDatastore => "System datastore",
            Self::CouchbaseDatastore => "Primary datastore",
            Self::IndexScan => "Index scan",
            Self::FileDatastore => "File datastore",
            Self::OtherDatastore => "Other datastore",
            Self::Transactions => "Transactions",
            Self::Dictionary => "Dictionary",
            Self::Virtual => "Virtual keyspace",
            Self::Sequences => "Sequences",
            Self::NaturalLanguage => "Natural language",
            Self::Aus => "Auto update statistics",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Violations
// ============================================================================

/// Rejection reasons for [`ErrorCode::checked_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorCodeViolation {
    /// Zero is reserved for "no code assigned".
    #[error("error code 0 is reserved and cannot be assigned")]
    Unassigned,
    /// The value lies outside every subsystem range.
    #[error("error code {value} does not belong to any subsystem range")]
    OutOfRange {
        /// The rejected value.
        value: i32,
    },
    /// The value lies outside the requested subsystem's range.
    #[error("error code {value} is outside the {subsystem} range")]
    WrongSubsystem {
        /// The rejected value.
        value: i32,
        /// The subsystem the caller asked for.
        subsystem: Subsystem,
    },
}

// ============================================================================
// Error Code
// ============================================================================

/// A numeric error code.
///
/// # Construction APIs
///
/// - `const_new`: for named constants (an out-of-range value is a compile error)
/// - `checked_new`: for runtime values that must belong to a known range
/// - `new`: unchecked, for codes arriving from the wire or from other services
///
/// `Display` renders the plain decimal value, which is also what the wire
/// format and catalog search use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Create a code pinned to `subsystem`.
    ///
    /// # Panics
    ///
    /// Panics if `code` is outside the subsystem range. In const contexts
    /// this is a compile-time error.
    #[inline]
    pub const fn const_new(subsystem: Subsystem, code: i32) -> Self {
        assert!(
            subsystem.contains(code),
            "Error code outside its subsystem range"
        );
        Self(code)
    }

    /// Wrap a raw value without range validation.
    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Validate a runtime value against the known ranges.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is zero or outside every range.
    pub fn checked_new(code: i32) -> Result<Self, ErrorCodeViolation> {
        if code == 0 {
            return Err(ErrorCodeViolation::Unassigned);
        }
        match Subsystem::for_code(code) {
            Some(_) => Ok(Self(code)),
            None => Err(ErrorCodeViolation::OutOfRange { value: code }),
        }
    }

    /// Validate a runtime value against one subsystem's range.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is zero or outside `subsystem`'s range.
    pub fn checked_in(subsystem: Subsystem, code: i32) -> Result<Self, ErrorCodeViolation> {
        if code == 0 {
            return Err(ErrorCodeViolation::Unassigned);
        }
        if !subsystem.contains(code) {
            return Err(ErrorCodeViolation::WrongSubsystem {
                value: code,
                subsystem,
            });
        }
        Ok(Self(code))
    }

    /// Get the raw numeric value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether a real code has been assigned (non-zero).
    #[inline]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// The subsystem owning this code, if it lies in a known range.
    #[inline]
    pub const fn subsystem(self) -> Option<Subsystem> {
        Subsystem::for_code(self.0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl PartialEq<i32> for ErrorCode {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_error_codes;

    #[test]
    fn valid_error_code_const_construction() {
        const CODE: ErrorCode = ErrorCode::const_new(Subsystem::Execution, 5002);
        assert_eq!(CODE.to_string(), "5002");
        assert_eq!(CODE.value(), 5002);
        assert_eq!(CODE.subsystem(), Some(Subsystem::Execution));
    }

    #[test]
    #[should_panic(expected = "outside its subsystem range")]
    fn const_new_rejects_foreign_range_at_runtime() {
        let code = std::hint::black_box(12009);
        let _ = ErrorCode::const_new(Subsystem::Execution, code);
    }

    #[test]
    fn checked_new_rejects_zero_and_gaps() {
        assert_eq!(ErrorCode::checked_new(0), Err(ErrorCodeViolation::Unassigned));
        assert_eq!(
            ErrorCode::checked_new(42),
            Err(ErrorCodeViolation::OutOfRange { value: 42 })
        );
        assert_eq!(
            ErrorCode::checked_new(30000),
            Err(ErrorCodeViolation::OutOfRange { value: 30000 })
        );
        assert!(ErrorCode::checked_new(17012).is_ok());
    }

    #[test]
    fn checked_in_reports_requested_subsystem() {
        let err = ErrorCode::checked_in(Subsystem::Aus, 5000).unwrap_err();
        assert_eq!(
            err,
            ErrorCodeViolation::WrongSubsystem {
                value: 5000,
                subsystem: Subsystem::Aus
            }
        );
        assert!(err.to_string().contains("Auto update statistics"));
        assert!(ErrorCode::checked_in(Subsystem::Aus, 20002).is_ok());
    }

    #[test]
    fn ranges_are_ordered_and_disjoint() {
        for pair in Subsystem::ALL.windows(2) {
            let (_, prev_end) = pair[0].range();
            let (next_start, _) = pair[1].range();
            assert!(prev_end < next_start, "{} overlaps {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn boundaries_resolve_to_owner() {
        assert_eq!(Subsystem::for_code(19099), Some(Subsystem::Virtual));
        assert_eq!(Subsystem::for_code(19100), Some(Subsystem::Sequences));
        assert_eq!(Subsystem::for_code(13999), Some(Subsystem::CouchbaseDatastore));
        assert_eq!(Subsystem::for_code(99), None);
    }

    #[test]
    fn code_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ErrorCode::new(12009)).unwrap();
        assert_eq!(json, "12009");
        let back: ErrorCode = serde_json::from_str("5370").unwrap();
        assert_eq!(back, 5370);
    }

    #[test]
    fn macro_batch_definition() {
        define_error_codes! {
            Subsystem::Transactions, TEST_CODES => {
                E_TEST_ONE = 17990,
                E_TEST_TWO = 17991,
            }
        }

        assert_eq!(E_TEST_ONE.to_string(), "17990");
        assert_eq!(E_TEST_TWO.value(), 17991);
        assert_eq!(TEST_CODES, &[("E_TEST_ONE", E_TEST_ONE), ("E_TEST_TWO", E_TEST_TWO)]);
    }
}
