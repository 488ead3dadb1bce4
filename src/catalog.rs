//! Diagnostic catalog: documentation for error codes.
//!
//! A [`Catalog`] maps codes to [`CatalogEntry`] values describing what a
//! failure means, why it happens and what the user can do about it. It is
//! immutable once built and is shared by reference; any number of threads
//! read it without locking.
//!
//! Most callers use [`Catalog::standard`], built once from the table in
//! this crate. Tests and tools can assemble their own with
//! [`Catalog::builder`].
//!
//! # Search
//!
//! [`Catalog::search`] compiles the pattern as a regular expression and
//! falls back to a literal substring match when it does not compile. An
//! entry matches when the pattern matches any of: the code in decimal, the
//! symbol, the description, a reason, an action, or the applicability list
//! joined with `", "`.

use crate::entries::{EntrySeed, STANDARD_ENTRIES};
use crate::{ErrorCode, UserClassification};
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::OnceLock;
use thiserror::Error;

type TextList = SmallVec<[Cow<'static, str>; 2]>;

// ============================================================================
// Catalog entry
// ============================================================================

/// Documentation for one error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    code: ErrorCode,
    symbol: Cow<'static, str>,
    description: Cow<'static, str>,
    reasons: TextList,
    actions: TextList,
    applies_to: SmallVec<[Cow<'static, str>; 1]>,
    user: UserClassification,
    warning: bool,
}

impl CatalogEntry {
    /// New entry with no reasons, actions or applicability.
    pub fn new(
        code: ErrorCode,
        symbol: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            symbol: symbol.into(),
            description: description.into(),
            reasons: SmallVec::new(),
            actions: SmallVec::new(),
            applies_to: SmallVec::new(),
            user: UserClassification::No,
            warning: false,
        }
    }

    /// Append a reason. Embedded newlines split it into lines on the wire.
    pub fn with_reason(mut self, reason: impl Into<Cow<'static, str>>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    /// Append a remedial action.
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Append a product the entry applies to. Duplicates are ignored.
    pub fn applies_to(mut self, product: impl Into<Cow<'static, str>>) -> Self {
        let product = product.into();
        if !self.applies_to.contains(&product) {
            self.applies_to.push(product);
        }
        self
    }

    /// User-vs-system classification.
    pub fn user(mut self, user: UserClassification) -> Self {
        self.user = user;
        self
    }

    /// Mark the code as a warning.
    pub fn warning(mut self) -> Self {
        self.warning = true;
        self
    }

    /// Code.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Symbolic name, e.g. `E_CB_DML`.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Description template; placeholders look like `«name»`.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reasons, in order.
    pub fn reasons(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.reasons.iter().map(|r| r.as_ref())
    }

    /// Remedial actions, in order.
    pub fn actions(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.actions.iter().map(|a| a.as_ref())
    }

    /// Products the entry applies to, in insertion order.
    pub fn applicability(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.applies_to.iter().map(|p| p.as_ref())
    }

    /// User-vs-system classification.
    #[inline]
    pub const fn classification(&self) -> UserClassification {
        self.user
    }

    /// Whether the code is a warning.
    #[inline]
    pub const fn is_warning(&self) -> bool {
        self.warning
    }

    fn applies_to_joined(&self) -> String {
        self.applies_to.join(", ")
    }

    /// Whether `pattern` matches any searchable field of this entry.
    pub fn contains(&self, pattern: &str) -> bool {
        self.matches(&Matcher::new(pattern))
    }

    fn matches(&self, matcher: &Matcher<'_>) -> bool {
        matcher.is_match(&self.code.to_string())
            || matcher.is_match(&self.symbol)
            || matcher.is_match(&self.description)
            || self.reasons.iter().any(|r| matcher.is_match(r))
            || self.actions.iter().any(|a| matcher.is_match(a))
            || matcher.is_match(&self.applies_to_joined())
    }

    /// Multi-line human rendering.
    pub fn format_plain(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{} {}: {}", self.code, self.symbol, self.description);

        if !self.reasons.is_empty() {
            output.push_str("\nReasons:\n");
            for reason in &self.reasons {
                push_bullet(&mut output, reason);
            }
        }

        if !self.actions.is_empty() {
            output.push_str("\nUser actions:\n");
            for action in &self.actions {
                push_bullet(&mut output, action);
            }
        }

        output.push('\n');
        if !self.applies_to.is_empty() {
            let _ = writeln!(output, "Applies to: {}", self.applies_to_joined());
        }
        let kind = match self.user {
            UserClassification::Yes => "user",
            UserClassification::Maybe => "user or system",
            UserClassification::No => "system",
        };
        let _ = writeln!(
            output,
            "Classification: {} {}",
            kind,
            if self.warning { "warning" } else { "error" }
        );
        output
    }
}

fn push_bullet(output: &mut String, text: &str) {
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        let _ = writeln!(output, "  - {}", first);
    }
    for line in lines {
        let _ = writeln!(output, "    {}", line);
    }
}

impl CatalogEntry {
    fn from_seed(seed: &EntrySeed) -> Self {
        Self {
            code: seed.code,
            symbol: Cow::Borrowed(seed.symbol),
            description: Cow::Borrowed(seed.description),
            reasons: seed.reasons.iter().copied().map(Cow::Borrowed).collect(),
            actions: seed.actions.iter().copied().map(Cow::Borrowed).collect(),
            applies_to: seed.applies_to.iter().copied().map(Cow::Borrowed).collect(),
            user: seed.user,
            warning: seed.warning,
        }
    }
}

/// Text rendered as a string when single-line, or as its lines otherwise.
struct Lines<'a>(&'a str);

impl Serialize for Lines<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.contains('\n') {
            serializer.collect_seq(self.0.split('\n'))
        } else {
            serializer.serialize_str(self.0)
        }
    }
}

struct LineList<'a>(&'a [Cow<'static, str>]);

impl Serialize for LineList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|text| Lines(text)))
    }
}

impl Serialize for CatalogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("code", &self.code)?;
        map.serialize_entry("description", &self.description)?;
        if !self.reasons.is_empty() {
            map.serialize_entry("reason", &LineList(&self.reasons))?;
        }
        if !self.actions.is_empty() {
            map.serialize_entry("user_action", &LineList(&self.actions))?;
        }
        if self.warning {
            map.serialize_entry("warning", &true)?;
        }
        if let Some(label) = self.user.wire_label() {
            map.serialize_entry("user_error", label)?;
        }
        if !self.applies_to.is_empty() {
            map.serialize_entry("applies_to", &self.applies_to_joined())?;
        }
        map.end()
    }
}

// ============================================================================
// Pattern matching
// ============================================================================

enum Matcher<'a> {
    Regex(Regex),
    Literal(&'a str),
}

impl<'a> Matcher<'a> {
    fn new(pattern: &'a str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => Self::Regex(regex),
            Err(_) => Self::Literal(pattern),
        }
    }

    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(haystack),
            Self::Literal(literal) => haystack.contains(literal),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Rejections while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries share a code.
    #[error("code {code} is documented twice ({first} and {second})")]
    DuplicateCode {
        /// The shared code.
        code: ErrorCode,
        /// Symbol of the entry added first.
        first: String,
        /// Symbol of the rejected entry.
        second: String,
    },
}

/// Immutable table of catalog entries, ordered by code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Collects entries for a [`Catalog`].
#[derive(Debug, Default)]
#[must_use = "call build() to obtain the catalog"]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    /// Add one entry.
    pub fn entry(mut self, entry: CatalogEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add several entries.
    pub fn entries(mut self, entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Add the built-in entries.
    pub fn with_standard_entries(self) -> Self {
        self.entries(STANDARD_ENTRIES.iter().map(CatalogEntry::from_seed))
    }

    /// Freeze the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCode`] if two entries share a code.
    pub fn build(mut self) -> Result<Catalog, CatalogError> {
        self.entries.sort_by_key(|entry| entry.code);
        if let Some(pair) = self.entries.windows(2).find(|w| w[0].code == w[1].code) {
            return Err(CatalogError::DuplicateCode {
                code: pair[0].code,
                first: pair[0].symbol.to_string(),
                second: pair[1].symbol.to_string(),
            });
        }
        tracing::debug!(entries = self.entries.len(), "diagnostic catalog assembled");
        Ok(Catalog {
            entries: self.entries,
        })
    }
}

impl Catalog {
    /// Start assembling a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The process-wide catalog of built-in entries.
    ///
    /// Built on first use; later calls return the same instance.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Catalog::builder()
                .with_standard_entries()
                .build()
                .unwrap_or_else(|err| {
                    tracing::error!(error = %err, "built-in catalog rejected, serving it empty");
                    Catalog::default()
                })
        })
    }

    /// Entry for `code`, or `None` if the code is not documented.
    pub fn describe(&self, code: ErrorCode) -> Option<&CatalogEntry> {
        self.entries
            .binary_search_by_key(&code, |entry| entry.code)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Entries matching `pattern`, ascending by code.
    pub fn search(&self, pattern: &str) -> Vec<&CatalogEntry> {
        let matcher = Matcher::new(pattern);
        self.entries
            .iter()
            .filter(|entry| entry.matches(&matcher))
            .collect()
    }

    fn classified_as(&self, code: ErrorCode, user: UserClassification) -> bool {
        self.describe(code).is_some_and(|entry| entry.user == user)
    }

    /// Whether `code` is documented as caused by the request.
    /// `Maybe` and undocumented codes are neither user nor system errors.
    pub fn is_user_error(&self, code: ErrorCode) -> bool {
        self.classified_as(code, UserClassification::Yes)
    }

    /// Whether `code` is documented as a system-side failure.
    pub fn is_system_error(&self, code: ErrorCode) -> bool {
        self.classified_as(code, UserClassification::No)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending code order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CatalogEntry> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions;
    use serde_json::json;

    fn aus_catalog() -> Catalog {
        Catalog::builder()
            .entry(
                CatalogEntry::new(
                    definitions::E_AUS_STORAGE,
                    "E_AUS_STORAGE",
                    "Error accessing Auto Update Statistics information from storage.",
                )
                .with_action("Retry the operation again. Or contact support.")
                .applies_to("Server"),
            )
            .entry(
                CatalogEntry::new(
                    definitions::E_AUS_NOT_SUPPORTED,
                    "E_AUS_NOT_SUPPORTED",
                    "Auto Update Statistics is not supported in Community Edition.",
                )
                .applies_to("Community Edition"),
            )
            .entry(
                CatalogEntry::new(definitions::E_CAS_MISMATCH, "E_CAS_MISMATCH", "CAS mismatch")
                    .with_reason("A concurrent update of a document was detected.")
                    .user(UserClassification::Yes),
            )
            .entry(
                CatalogEntry::new(definitions::E_INTERNAL, "E_INTERNAL", "An internal error occurred.")
                    .user(UserClassification::Maybe),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn describe_returns_none_for_unknown_code() {
        let catalog = aus_catalog();
        assert!(catalog.describe(ErrorCode::new(9999)).is_none());
        assert_eq!(
            catalog.describe(definitions::E_CAS_MISMATCH).map(CatalogEntry::symbol),
            Some("E_CAS_MISMATCH")
        );
    }

    #[test]
    fn symbol_search_returns_single_entry() {
        let catalog = aus_catalog();
        let found = catalog.search("E_AUS_STORAGE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code(), definitions::E_AUS_STORAGE);
    }

    #[test]
    fn search_results_ascend_by_code() {
        let catalog = aus_catalog();
        let found = catalog.search("E_");
        let codes: Vec<i32> = found.iter().map(|e| e.code().value()).collect();
        assert_eq!(codes, vec![5000, 12033, 20000, 20002]);
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        let catalog = Catalog::builder()
            .entry(CatalogEntry::new(ErrorCode::new(3006), "E_TEST", "bad escape (\\q"))
            .build()
            .unwrap();
        assert_eq!(catalog.search("(\\q").len(), 1);
        assert!(catalog.search("(zz").is_empty());
    }

    #[test]
    fn search_matches_code_and_applicability() {
        let catalog = aus_catalog();
        assert_eq!(catalog.search("^12033$").len(), 1);
        assert_eq!(catalog.search("Community Edition")[0].code(), definitions::E_AUS_NOT_SUPPORTED);
        assert_eq!(catalog.search("concurrent update")[0].code(), definitions::E_CAS_MISMATCH);
    }

    #[test]
    fn joined_applicability_is_searchable() {
        let entry = CatalogEntry::new(ErrorCode::new(7000), "E_TEST", "x")
            .applies_to("Server")
            .applies_to("Infer tool");
        assert!(entry.contains("Server, Infer"));
        assert!(!entry.contains("Server,Infer"));
    }

    #[test]
    fn classification_is_strict() {
        let catalog = aus_catalog();
        assert!(catalog.is_user_error(definitions::E_CAS_MISMATCH));
        assert!(!catalog.is_system_error(definitions::E_CAS_MISMATCH));

        assert!(catalog.is_system_error(definitions::E_AUS_STORAGE));

        assert!(!catalog.is_user_error(definitions::E_INTERNAL));
        assert!(!catalog.is_system_error(definitions::E_INTERNAL));

        assert!(!catalog.is_user_error(ErrorCode::new(9999)));
        assert!(!catalog.is_system_error(ErrorCode::new(9999)));
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let err = Catalog::builder()
            .entry(CatalogEntry::new(definitions::E_INTERNAL, "E_INTERNAL", "a"))
            .entry(CatalogEntry::new(definitions::E_INTERNAL, "E_INTERNAL_AGAIN", "b"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode { code, .. } if code == definitions::E_INTERNAL));
    }

    #[test]
    fn entry_json_splits_multiline_text() {
        let entry = CatalogEntry::new(ErrorCode::new(1010), "E_SERVICE_HTTP_UNSUPPORTED_METHOD", "Unsupported http method")
            .with_reason("single line")
            .with_action("line1\nline2")
            .user(UserClassification::Maybe)
            .warning()
            .applies_to("Server")
            .applies_to("cbq-shell");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "code": 1010,
                "description": "Unsupported http method",
                "reason": ["single line"],
                "user_action": [["line1", "line2"]],
                "warning": true,
                "user_error": "Possibly",
                "applies_to": "Server, cbq-shell",
            })
        );
    }

    #[test]
    fn entry_json_omits_empty_fields() {
        let entry = CatalogEntry::new(ErrorCode::new(17014), "E_KEY_NOT_FOUND", "Key not found");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"code": 17014, "description": "Key not found"}));
    }

    #[test]
    fn format_plain_lists_every_section() {
        let text = CatalogEntry::new(ErrorCode::new(101), "E_SHELL_UNSUPPORTED_PROTOCOL", "Unsupported protocol scheme")
            .with_reason("The scheme is not supported.")
            .with_action("Correct the URL.\nSchemes: http, https")
            .applies_to("cbq-shell")
            .user(UserClassification::Yes)
            .format_plain();

        assert!(text.starts_with("101 E_SHELL_UNSUPPORTED_PROTOCOL: Unsupported protocol scheme\n"));
        assert!(text.contains("  - The scheme is not supported.\n"));
        assert!(text.contains("  - Correct the URL.\n    Schemes: http, https\n"));
        assert!(text.contains("Applies to: cbq-shell\n"));
        assert!(text.contains("Classification: user error\n"));
    }

    #[test]
    fn standard_catalog_is_built_once() {
        let first = Catalog::standard();
        let second = Catalog::standard();
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());

        let dml = first.describe(definitions::E_CB_DML).unwrap();
        assert!(dml.description().starts_with("DML Error"));
        assert!(first.is_user_error(definitions::E_CB_DML));
        assert!(first.describe(definitions::E_AUS_STORAGE).is_some());
        assert_eq!(first.search("^E_AUS_STORAGE$").len(), 1);
    }

    #[test]
    fn standard_catalog_documents_every_declared_code() {
        let catalog = Catalog::standard();
        let declared: usize = definitions::ALL_CODES.iter().map(|group| group.len()).sum();
        assert_eq!(catalog.len(), declared);

        for (name, code) in definitions::ALL_CODES.iter().flat_map(|group| group.iter()) {
            let entry = catalog.describe(*code);
            assert_eq!(entry.map(CatalogEntry::symbol), Some(*name));
        }

        let driver = catalog.describe(definitions::E_SHELL_DRIVER_OPEN).unwrap();
        assert_eq!(driver.description(), "Failed to open a connection to the server endpoint.");
        assert!(catalog.is_system_error(definitions::E_SHELL_DRIVER_OPEN));
        assert!(!catalog.is_user_error(definitions::E_SHELL_DRIVER_OPEN));
        assert!(catalog.is_user_error(definitions::E_SHELL_INVALID_URL));
    }
}
