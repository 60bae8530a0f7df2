// Benchmarks for scalar field arithmetic over supported curve orders

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use recrypt_scalar::{Curve, ScalarField};

/// Generate a random scalar for benchmarking
fn random_scalar(curve: Curve) -> ScalarField {
    ScalarField::random(curve).expect("OS random source available")
}

/// Benchmark scalar arithmetic on one curve
fn bench_curve(c: &mut Criterion, curve: Curve) {
    let mut group = c.benchmark_group(format!("scalar-{}", curve));

    group.bench_function("multiplication", |b| {
        b.iter_batched(
            || (random_scalar(curve), random_scalar(curve)),
            |(x, y)| black_box(x.mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("division", |b| {
        b.iter_batched(
            || (random_scalar(curve), random_scalar(curve)),
            |(x, y)| black_box(x.div(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("inversion", |b| {
        b.iter_batched(
            || random_scalar(curve),
            |x| black_box(x.invert()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("random-generation", |b| {
        b.iter(|| black_box(ScalarField::random(curve)))
    });

    group.finish();
}

fn bench_scalar_operations(c: &mut Criterion) {
    for curve in Curve::ALL {
        bench_curve(c, curve);
    }
}

criterion_group!(benches, bench_scalar_operations);
criterion_main!(benches);
