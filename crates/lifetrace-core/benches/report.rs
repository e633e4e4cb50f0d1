//! Benchmark for per-tick report computation.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifetrace_core::LifespanReport;

fn bench_compute_report(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1993, 9, 22).unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 8, 29)
        .unwrap()
        .and_hms_opt(12, 34, 56)
        .unwrap();

    c.bench_function("compute_report", |b| {
        b.iter(|| LifespanReport::compute(black_box(birth), black_box(now), black_box(80.0)));
    });
}

criterion_group!(benches, bench_compute_report);
criterion_main!(benches);
