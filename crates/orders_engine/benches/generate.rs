//! Criterion benchmarks for order batch generation.
//!
//! Measures sequential and parallel batch throughput across batch sizes to
//! characterise scaling behaviour.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use orders_core::config::GeneratorConfig;
use orders_engine::{OrderGenerator, OrderRng};

fn fixed_generator() -> OrderGenerator {
    let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    OrderGenerator::with_today(GeneratorConfig::default(), today).unwrap()
}

/// Benchmark single-record assembly.
fn bench_generate_one(c: &mut Criterion) {
    let generator = fixed_generator();
    let mut rng = OrderRng::from_seed(42);

    c.bench_function("generate_one", |b| {
        b.iter(|| black_box(generator.generate_one(&mut rng)));
    });
}

/// Benchmark sequential batch generation.
fn bench_generate_batch(c: &mut Criterion) {
    let generator = fixed_generator();
    let mut group = c.benchmark_group("generate_batch");

    for size in [1_000, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            b.iter(|| {
                let mut rng = OrderRng::from_seed(42);
                black_box(generator.generate(size, &mut rng))
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            b.iter(|| black_box(generator.generate_parallel(size, 42)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_one, bench_generate_batch);
criterion_main!(benches);
