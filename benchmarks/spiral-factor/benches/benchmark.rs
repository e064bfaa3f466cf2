//! Criterion benchmarks for spiral diagonal sums and factorization.
//!
//! Benchmarks cover:
//! - Diagonal sum scalability (iterative vs closed form)
//! - Reference grid construction
//! - Largest prime factor on primes, smooth numbers, and random inputs
//! - Trial division strategies (sequential vs odd-only)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use spiral_factor::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate random factoring targets below `bound`.
fn generate_targets(count: usize, bound: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(2..bound)).collect()
}

// ============================================================================
// Diagonal Sum Benchmarks
// ============================================================================

fn bench_diagonal_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagonal_sum");

    for &n in &[11u64, 1_001, 100_001, 1_000_001] {
        let iterative = Spiral::new().method(Iterative).build().unwrap();
        let closed_form = Spiral::new().method(ClosedForm).build().unwrap();

        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| iterative.diagonal_sum(black_box(n)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("closed_form", n), &n, |b, &n| {
            b.iter(|| closed_form.diagonal_sum(black_box(n)).unwrap())
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_grid");

    for &n in &[11usize, 101, 1_001] {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| SpiralGrid::new(black_box(n)).unwrap().diagonal_sum())
        });
    }

    group.finish();
}

// ============================================================================
// Factorization Benchmarks
// ============================================================================

fn bench_largest_prime_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("largest_prime_factor");

    let cases: [(&str, u64); 4] = [
        ("euler_3", 600_851_475_143),
        ("prime_32bit", 4_294_967_291),
        ("power_of_two", 1 << 62),
        ("u64_max", u64::MAX),
    ];

    for (name, value) in cases {
        group.bench_with_input(BenchmarkId::new("sequential", name), &value, |b, &v| {
            b.iter(|| largest_prime_factor(black_box(v)).unwrap())
        });
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial_division");
    let targets = generate_targets(1_000, 1_000_000_000, 42);

    for strategy in [Sequential, OddOnly] {
        let factorizer = Factorizer::new().strategy(strategy).build().unwrap();
        group.throughput(Throughput::Elements(targets.len() as u64));
        group.bench_function(BenchmarkId::new("random", format!("{:?}", strategy)), |b| {
            b.iter(|| {
                targets
                    .iter()
                    .map(|&v| factorizer.largest_prime_factor(black_box(v)).unwrap())
                    .fold(0u64, u64::wrapping_add)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_diagonal_sum,
    bench_grid,
    bench_largest_prime_factor,
    bench_strategies
);
criterion_main!(benches);
