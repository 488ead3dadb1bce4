//! End-to-end scenarios: a failure raised deep in a component, enriched on
//! its way up, then logged, serialized and explained to an operator.

use query_errors::{
    Catalog, Cause, ErrorCode, ErrorRecord, ForeignError, FormalCause, Result, Severity, Tristate,
    definitions, exception, new_cas_mismatch, new_cb_dml_error, new_error,
    new_execution_internal_error, new_key_not_found_error, new_subquery_build_error,
};
use serde_json::json;

fn upsert(key: &str) -> Result<()> {
    let cas = new_cas_mismatch("UPSERT", key);
    Err(new_cb_dml_error(cas, "UPSERT", key, true))
}

fn run_statement(key: &str) -> Result<()> {
    upsert(key).map_err(|mut err| {
        err.set_cause(Cause::structured([("request_id", "r-1001")]));
        err
    })
}

#[test]
fn cas_mismatch_surfaces_as_retryable_dml_error() {
    let err = run_statement("airline_10").unwrap_err();

    assert_eq!(err.code().value(), 12009);
    assert!(err.is_fatal());
    assert_eq!(err.retry(), Tristate::Yes);
    assert!(err.message().contains("CAS mismatch"));
    assert!(err.has_icause(definitions::E_CAS_MISMATCH));
    assert!(err.contains_text("r-1001"));

    let wire = err.object();
    assert_eq!(wire["code"], 12009);
    assert_eq!(wire["retry"], true);
    assert_eq!(wire["key"], "datastore.couchbase.DML_error");
    assert_eq!(wire["cause"], json!({"request_id": "r-1001"}));
    assert!(wire["icause"].as_str().unwrap().contains("airline_10"));
    assert_eq!(wire["caller"], format!("scenarios:{}", line_of_upsert()));

    let entry = Catalog::standard().describe(err.code()).unwrap();
    assert!(Catalog::standard().is_user_error(err.code()));
    assert!(entry.format_plain().contains("E_CB_DML"));
}

fn line_of_upsert() -> u32 {
    // `upsert` builds the DML error on the second line of its body.
    let source = include_str!("scenarios.rs");
    let idx = source
        .lines()
        .position(|line| line.contains("Err(new_cb_dml_error(cas"))
        .unwrap();
    idx as u32 + 1
}

#[test]
fn subquery_failure_wrapped_in_execution_error() {
    let a = new_subquery_build_error(ForeignError::text("plan not found"));
    let mut b = new_execution_internal_error("subquery evaluation");
    b.set_cause(a);

    assert!(b.has_cause(ErrorCode::new(5370)));
    assert!(b.has_cause(ErrorCode::new(5002)));
    assert!(!b.has_cause(ErrorCode::new(9999)));
    assert!(!b.has_icause(ErrorCode::new(5370)));
    assert!(b.contains_text("plan not found"));
}

#[test]
fn foreign_failures_become_internal_errors_once() {
    let io = std::io::Error::other("connection reset by peer");
    let first = new_error(io, "reading index stats");
    assert_eq!(first.code(), definitions::E_INTERNAL);

    let again = new_error(first.clone(), "ignored");
    assert_eq!(again.message(), "reading index stats");
    assert_eq!(again.caller(), first.caller());
    assert!(matches!(again.formal_cause(), Some(FormalCause::Foreign(_))));
}

#[test]
fn decoded_records_are_lossy_but_searchable() {
    let inner = new_key_not_found_error("hotel_7");
    let outer = exception!(
        cause = inner;
        definitions::E_EXECUTION_INTERNAL,
        "execution.internal_error",
        "Execution internal error: {}",
        "fetch"
    );

    let decoded = ErrorRecord::from_json(&outer.to_json().unwrap()).unwrap();
    assert_eq!(decoded.level(), Severity::Exception);
    assert_eq!(decoded.to_string(), outer.to_string());
    assert!(decoded.contains_text("hotel_7"));
    assert!(outer.has_icause(definitions::E_KEY_NOT_FOUND));
    assert!(!decoded.has_icause(definitions::E_KEY_NOT_FOUND));
}

#[test]
fn decoded_map_codes_do_not_match_has_cause() {
    let text = r#"{"code": 5002, "key": "", "message": "outer", "caller": "exec:1",
                   "cause": {"code": 5370, "message": "inner"}}"#;
    let decoded = ErrorRecord::from_json(text).unwrap();

    // Decoded integers are 64-bit and are not treated as codes.
    assert!(decoded.has_cause(ErrorCode::new(5002)));
    assert!(!decoded.has_cause(ErrorCode::new(5370)));
    assert!(decoded.contains_text("inner"));
}

#[test]
fn catalog_search_finds_aus_storage_symbol() {
    let found = Catalog::standard().search("^E_AUS_STORAGE$");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code(), definitions::E_AUS_STORAGE);

    let all_aus = Catalog::standard().search("E_AUS_");
    assert!(all_aus.len() > 1);
    assert!(all_aus.windows(2).all(|w| w[0].code() < w[1].code()));
}
