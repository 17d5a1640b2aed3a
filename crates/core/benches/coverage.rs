//! Benchmarks for the coverage calculation kernel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tilecalc_core::{compute_coverage, convert_to_meters, LinearUnit};

fn bench_single_coverage(c: &mut Criterion) {
    c.bench_function("coverage_single", |b| {
        b.iter(|| {
            compute_coverage(
                black_box(4.0),
                black_box(3.0),
                black_box(0.3),
                black_box(0.3),
                black_box(20),
                black_box(10),
            )
        })
    });
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_to_meters");

    for unit in LinearUnit::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(unit), &unit, |b, &unit| {
            b.iter(|| convert_to_meters(black_box(42.5), black_box(unit)))
        });
    }

    group.finish();
}

fn bench_batch_coverage(c: &mut Criterion) {
    // A spread of room sizes against a fixed tile
    let rooms: Vec<(f64, f64)> = (1..=1000)
        .map(|i| (1.0 + i as f64 * 0.01, 2.0 + i as f64 * 0.005))
        .collect();

    c.bench_function("coverage_batch_1000", |b| {
        b.iter(|| {
            for &(l, w) in &rooms {
                let _ = compute_coverage(black_box(l), black_box(w), 0.3, 0.3, 20, 10);
            }
        })
    });
}

criterion_group!(benches, bench_single_coverage, bench_conversion, bench_batch_coverage);
criterion_main!(benches);
