//! Property-based tests for query_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use query_errors::{
    ALL_CODES, Catalog, CatalogEntry, Cause, CauseMap, CauseValue, ErrorCode, ErrorRecord,
    Location, Severity,
};
use proptest::prelude::*;

fn all_codes() -> Vec<ErrorCode> {
    ALL_CODES
        .iter()
        .flat_map(|registry| registry.iter().map(|(_, code)| *code))
        .collect()
}

fn record(code: ErrorCode, message: String) -> ErrorRecord {
    ErrorRecord::builder(code, Severity::Exception)
        .message(message)
        .build()
}

fn into_cause(value: CauseValue) -> Cause {
    match value {
        CauseValue::Map(map) => Cause::Structured(map),
        CauseValue::Record(record) => Cause::Chained(record),
        other => {
            let mut map = CauseMap::new();
            map.insert("value".to_owned(), other);
            Cause::Structured(map)
        }
    }
}

fn primitive() -> impl Strategy<Value = CauseValue> {
    prop_oneof![
        any::<bool>().prop_map(CauseValue::Bool),
        any::<i32>().prop_map(CauseValue::I32),
        "\\PC{0,40}".prop_map(CauseValue::Text),
    ]
}

// ============================================================================
// TRUNCATION PROPERTIES
// ============================================================================

proptest! {
    /// Log lines stay valid UTF-8 whatever the message holds
    #[test]
    fn log_line_preserves_utf8(s in "\\PC*") {
        let err = record(query_errors::E_INTERNAL, s);

        let mut buffer = String::new();
        err.log_entry().write_to(&mut buffer).unwrap();

        assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
    }

    /// Log lines are bounded
    #[test]
    fn log_line_is_bounded(message in "\\PC{0,10000}", cause in "\\PC{0,10000}") {
        let err = ErrorRecord::builder(query_errors::E_INTERNAL, Severity::Exception)
            .message(message)
            .cause(cause)
            .build();

        let mut buffer = String::new();
        err.log_entry().write_to(&mut buffer).unwrap();

        // Max: 1024 per field + formatting
        assert!(buffer.len() < 6 * 1024);
    }
}

// ============================================================================
// SEVERITY PROPERTIES
// ============================================================================

proptest! {
    /// Exactly the exception level is fatal, exactly the warning level warns
    #[test]
    fn severity_flags_are_exclusive(
        level in prop::sample::select(vec![
            Severity::Exception,
            Severity::Error,
            Severity::Warning,
            Severity::Notice,
            Severity::Info,
            Severity::Log,
            Severity::Debug,
        ])
    ) {
        let err = ErrorRecord::builder(query_errors::E_INTERNAL, level).build();
        assert_eq!(err.is_fatal(), level == Severity::Exception);
        assert_eq!(err.is_warning(), level == Severity::Warning);
        assert!(!(err.is_fatal() && err.is_warning()));
    }
}

// ============================================================================
// WIRE PROPERTIES
// ============================================================================

proptest! {
    /// Identity fields survive a JSON round trip when causes are flat
    #[test]
    fn flat_records_round_trip(
        code in prop::sample::select(all_codes()),
        key in "\\PC{0,60}",
        message in "\\PC{0,200}",
        file in "[a-z_]{1,20}",
        line in 1u32..100_000,
        cause in prop::collection::btree_map("[a-z]{1,8}", primitive(), 0..6),
    ) {
        let original = ErrorRecord::builder(code, Severity::Exception)
            .key(key)
            .message(message)
            .cause(cause)
            .at(Location::new(file, line))
            .build();

        let decoded = ErrorRecord::from_json(&original.to_json().unwrap()).unwrap();

        prop_assert_eq!(decoded.code(), original.code());
        prop_assert_eq!(decoded.translation_key(), original.translation_key());
        prop_assert_eq!(decoded.message(), original.message());
        prop_assert_eq!(decoded.caller(), original.caller());
        prop_assert_eq!(decoded.object(), original.object());
    }

    /// Decoding arbitrary text never panics
    #[test]
    fn decode_never_panics(text in "\\PC{0,200}") {
        let _ = ErrorRecord::from_json(&text);
    }
}

// ============================================================================
// CHAIN SEARCH PROPERTIES
// ============================================================================

proptest! {
    /// has_cause sees every code in the informal chain and nothing else
    #[test]
    fn has_cause_matches_exactly_the_chain(
        codes in prop::sample::subsequence(all_codes(), 1..6),
        as_map in prop::collection::vec(any::<bool>(), 6),
        typed in prop::collection::vec(any::<bool>(), 6),
        absent in prop::sample::select(all_codes()),
    ) {
        prop_assume!(!codes.contains(&absent));

        let mut node: Option<CauseValue> = None;
        for (idx, code) in codes.iter().enumerate().skip(1).rev() {
            node = Some(if as_map[idx] {
                let mut map = CauseMap::new();
                let value = if typed[idx] {
                    CauseValue::Code(*code)
                } else {
                    CauseValue::I32(code.value())
                };
                map.insert("code".to_owned(), value);
                if let Some(next) = node.take() {
                    map.insert("cause".to_owned(), next);
                }
                CauseValue::Map(map)
            } else {
                let mut builder = ErrorRecord::builder(*code, Severity::Exception);
                if let Some(next) = node.take() {
                    builder = builder.cause(into_cause(next));
                }
                CauseValue::Record(Box::new(builder.build()))
            });
        }

        let mut top = ErrorRecord::builder(codes[0], Severity::Exception);
        if let Some(next) = node {
            top = top.cause(into_cause(next));
        }
        let top = top.build();

        for code in &codes {
            prop_assert!(top.has_cause(*code));
        }
        prop_assert!(!top.has_cause(absent));
    }

    /// Any substring of the rendered text is found
    #[test]
    fn contains_text_finds_rendered_substrings(
        prefix in "\\PC{0,30}",
        needle in "\\PC{1,10}",
        suffix in "\\PC{0,30}",
    ) {
        let err = record(query_errors::E_INTERNAL, format!("{}{}{}", prefix, needle, suffix));
        prop_assert!(err.contains_text(&needle));
        prop_assert!(err.contains_text(&err.to_string()));
    }

    /// Text buried in a nested informal node is found
    #[test]
    fn contains_text_finds_nested_cause_text(
        needle in "[a-z]{4,12}",
        depth in 1usize..5,
    ) {
        let mut inner = ErrorRecord::builder(query_errors::E_KEY_NOT_FOUND, Severity::Exception)
            .message("leaf")
            .cause(Cause::structured([("detail", needle.as_str())]))
            .build();
        for _ in 0..depth {
            inner = ErrorRecord::builder(query_errors::E_EXECUTION_INTERNAL, Severity::Exception)
                .message("wrapper")
                .cause(inner)
                .build();
        }
        prop_assert!(inner.contains_text(&needle));
    }
}

// ============================================================================
// CATALOG PROPERTIES
// ============================================================================

proptest! {
    /// Search results ascend by code and each one matches the pattern
    #[test]
    fn search_is_sorted_and_sound(
        pattern in prop_oneof![
            "[A-Za-z_ ]{1,6}",
            Just("E_AUS".to_owned()),
            Just("^E_".to_owned()),
            Just("(unclosed".to_owned()),
            Just("Server".to_owned()),
        ]
    ) {
        let results = Catalog::standard().search(&pattern);
        for pair in results.windows(2) {
            prop_assert!(pair[0].code() < pair[1].code());
        }
        for entry in &results {
            prop_assert!(entry.contains(&pattern));
        }
    }

    /// Multi-line reasons become arrays of lines; single lines stay strings
    #[test]
    fn reasons_split_on_newlines(lines in prop::collection::vec("[a-z ]{1,20}", 1..5)) {
        let entry = CatalogEntry::new(ErrorCode::new(5000), "E_INTERNAL", "internal")
            .with_reason(lines.join("\n"));
        let value = serde_json::to_value(&entry).unwrap();
        let reason = &value["reason"][0];

        if lines.len() == 1 {
            prop_assert_eq!(reason.as_str(), Some(lines[0].as_str()));
        } else {
            let rendered: Vec<&str> = reason
                .as_array()
                .unwrap()
                .iter()
                .map(|line| line.as_str().unwrap())
                .collect();
            prop_assert_eq!(rendered, lines.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}

// ============================================================================
// CONCURRENT PROPERTIES
// ============================================================================

proptest! {
    /// The standard catalog is shared safely across threads
    #[test]
    fn concurrent_catalog_reads(thread_count in 1usize..8) {
        let handles: Vec<_> = (0..thread_count)
            .map(|_| {
                std::thread::spawn(|| {
                    let catalog = Catalog::standard();
                    (catalog as *const Catalog as usize, catalog.search("CAS").len())
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for pair in results.windows(2) {
            prop_assert_eq!(pair[0], pair[1]);
        }
    }
}
