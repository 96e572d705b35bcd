//! Criterion benches for tiling generation on S² and S³.
//!
//! - S²: (2 3 3), (2 3 4), (2 3 5) and the star symbol (2 3 5/2).
//! - S³: the A4, BC4 and F4 catalog roots.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wythoff::symbol::{Symbol3, Symbol4};
use wythoff::tiling::{Tiling3, Tiling4};

fn bench_tiling3(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiling3");
    for text in ["2 3 3", "2 3 4", "2 3 5", "2 3 5/2"] {
        let symbol: Symbol3 = text.parse().unwrap();
        group.bench_function(BenchmarkId::new("generate", text), |b| {
            b.iter(|| Tiling3::new(symbol).unwrap())
        });
    }
    group.finish();
}

fn bench_tiling4(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiling4");
    group.sample_size(10);
    let cases = [
        ("A4", [2, 2, 3, 3, 3, 2]),
        ("BC4", [2, 2, 3, 3, 4, 2]),
        ("F4", [2, 2, 3, 4, 3, 2]),
    ];
    for (name, s) in cases {
        let symbol = Symbol4::from(s);
        group.bench_function(BenchmarkId::new("generate", name), |b| {
            b.iter(|| Tiling4::new(symbol).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tiling3, bench_tiling4);
criterion_main!(benches);
