// benches/error_performance.rs
//! Benchmarks for query_errors performance characteristics
//!
//! Covers record construction, chain searches, serialization, log
//! formatting and catalog lookups.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use query_errors::{
    definitions, new_cas_mismatch, new_cb_dml_error, new_execution_internal_error, Catalog, Cause,
    ErrorRecord, ForeignError, Severity,
};

fn chain(depth: usize) -> ErrorRecord {
    let mut record = ErrorRecord::builder(definitions::E_SUBQUERY_BUILD, Severity::Exception)
        .message("Unable to run subquery")
        .cause(Cause::structured([("detail", "plan missing")]))
        .build();
    for _ in 0..depth {
        let mut outer = new_execution_internal_error("nested");
        outer.set_cause(record);
        record = outer;
    }
    record
}

// ============================================================================
// RECORD CREATION BENCHMARKS
// ============================================================================

fn bench_record_creation_simple(c: &mut Criterion) {
    c.bench_function("create_simple_record", |b| {
        b.iter(|| {
            black_box(
                ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
                    .key("Internal Error")
                    .message("operation failed")
                    .build(),
            )
        })
    });
}

fn bench_record_creation_with_causes(c: &mut Criterion) {
    c.bench_function("create_dml_record_with_causes", |b| {
        b.iter(|| {
            let cas = new_cas_mismatch(black_box("UPSERT"), black_box("airline_10"));
            black_box(new_cb_dml_error(cas, "UPSERT", "airline_10", true))
        })
    });
}

fn bench_record_creation_foreign(c: &mut Criterion) {
    c.bench_function("create_record_foreign_cause", |b| {
        b.iter(|| {
            black_box(
                ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
                    .message("read failed")
                    .formal_cause(ForeignError::text("connection reset"))
                    .build(),
            )
        })
    });
}

// ============================================================================
// CHAIN SEARCH BENCHMARKS
// ============================================================================

fn bench_chain_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_search");

    for depth in [1usize, 4, 16] {
        let record = chain(depth);

        group.bench_with_input(BenchmarkId::new("has_cause", depth), &record, |b, record| {
            b.iter(|| black_box(record.has_cause(definitions::E_SUBQUERY_BUILD)))
        });
        group.bench_with_input(BenchmarkId::new("contains_text", depth), &record, |b, record| {
            b.iter(|| black_box(record.contains_text("plan missing")))
        });
    }

    group.finish();
}

// ============================================================================
// SERIALIZATION BENCHMARKS
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    let record = chain(4);
    let text = record.to_json().unwrap();

    group.bench_function("object", |b| b.iter(|| black_box(record.object())));
    group.bench_function("to_json", |b| b.iter(|| black_box(record.to_json().unwrap())));
    group.bench_function("from_json", |b| {
        b.iter(|| black_box(ErrorRecord::from_json(black_box(&text)).unwrap()))
    });

    group.finish();
}

// ============================================================================
// LOGGING BENCHMARKS
// ============================================================================

fn bench_log_truncation(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_truncation");

    for size in [100, 1024, 5000, 10000] {
        let err = ErrorRecord::builder(definitions::E_INTERNAL, Severity::Exception)
            .message("A".repeat(size))
            .build();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut buffer = String::new();
                err.log_entry().write_to(&mut buffer).unwrap();
                black_box(buffer)
            })
        });
    }

    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let err = chain(2);
    c.bench_function("record_display_format", |b| b.iter(|| black_box(err.to_string())));
}

// ============================================================================
// CATALOG BENCHMARKS
// ============================================================================

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let catalog = Catalog::standard();

    group.bench_function("describe", |b| {
        b.iter(|| black_box(catalog.describe(black_box(definitions::E_CAS_MISMATCH))))
    });
    for pattern in ["E_AUS_STORAGE", "^E_CB_", "concurrent", "(unclosed"] {
        group.bench_with_input(BenchmarkId::new("search", pattern), &pattern, |b, pattern| {
            b.iter(|| black_box(catalog.search(pattern).len()))
        });
    }

    group.finish();
}

criterion_group!(
    creation_benches,
    bench_record_creation_simple,
    bench_record_creation_with_causes,
    bench_record_creation_foreign,
);

criterion_group!(search_benches, bench_chain_searches);

criterion_group!(serialization_benches, bench_serialization);

criterion_group!(logging_benches, bench_log_truncation, bench_display);

criterion_group!(catalog_benches, bench_catalog);

criterion_main!(
    creation_benches,
    search_benches,
    serialization_benches,
    logging_benches,
    catalog_benches,
);
