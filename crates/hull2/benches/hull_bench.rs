//! Criterion benchmarks for planar hull construction.
//! Focus sizes: n in {10, 100, 1_000, 10_000} across cloud shapes.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use hull2::{compute_hull, compute_hull_with, HullCfg};

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2");
    let shapes = [
        ("disk", CloudShape::Disk),
        ("square", CloudShape::Square),
        ("circle", CloudShape::Circle),
        ("lattice", CloudShape::Lattice { side: 32 }),
    ];
    for &n in &[10usize, 100, 1_000, 10_000] {
        for &(name, shape) in &shapes {
            let cfg = CloudCfg {
                shape,
                count: n,
                scale: 1.0,
            };
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                b.iter_batched(
                    || draw_cloud(cfg, ReplayToken { seed: 43, index: 0 }),
                    |pts| {
                        let _hull = compute_hull(&pts).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2_parallel");
    let cfg = CloudCfg {
        shape: CloudShape::Circle,
        count: 100_000,
        scale: 1.0,
    };
    let pts = draw_cloud(cfg, ReplayToken { seed: 44, index: 0 });
    for &min in &[usize::MAX, 4_096, 512] {
        let label = if min == usize::MAX {
            "sequential".to_string()
        } else {
            format!("min{min}")
        };
        group.bench_function(BenchmarkId::new("circle_100k", label), |b| {
            b.iter(|| compute_hull_with(&pts, HullCfg::parallel(min)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shapes, bench_parallel);
criterion_main!(benches);
