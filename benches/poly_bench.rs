// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

//! Benchmarks for polynomial multiplication and powers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use polycalc::{Polynom, Powers, Var};

/// Sum of `n` distinct monomials over the variables a to e.
fn dense_poly(n: u32) -> Polynom<i64> {
    Polynom::from_monoms((0..n).map(|i| {
        let powers: Powers = (0..5)
            .filter_map(|v| Var::new(v).map(|var| (var, ((i >> v) & 1) * (1 + i % 3))))
            .collect();
        (i64::from(i % 17) - 8, powers)
    }))
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for size in [4, 16, 64] {
        let a = dense_poly(size);
        let b = dense_poly(size + 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(&a).mul(black_box(&b)))
        });
    }
    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");
    let p: Polynom<i64> = "a + b + c + 1".parse().unwrap();
    for n in [2u32, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| black_box(&p).pow(n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mul, bench_pow);
criterion_main!(benches);
