//! Complex arithmetic benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lib_complex::Complex;

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Complex::new(1.25, -0.75);
    let b = Complex::new(-3.5, 2.0);

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });

    group.bench_function("div", |bench| {
        bench.iter(|| black_box(a) / black_box(b));
    });

    group.bench_function("exp", |bench| {
        bench.iter(|| black_box(a).exp());
    });

    group.finish();
}

fn bench_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("power");
    let z = Complex::new(0.9, 0.4);

    for n in [2, 8, 64].iter() {
        group.bench_with_input(BenchmarkId::new("powi", n), n, |bench, &n| {
            bench.iter(|| black_box(z).powi(black_box(n)));
        });

        // Repeated multiplication for comparison against the polar form
        group.bench_with_input(BenchmarkId::new("repeated_mul", n), n, |bench, &n| {
            bench.iter(|| {
                let mut acc = Complex::ONE;
                for _ in 0..n {
                    acc *= black_box(z);
                }
                acc
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_power);
criterion_main!(benches);
