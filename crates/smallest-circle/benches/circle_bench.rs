//! Criterion benchmarks for the smallest enclosing circle.
//! Focus sizes: n in {10, 100, 1000, 10000}; naive reference only for n = 10.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use smallest_circle::api::{
    draw_points, make_circle_naive, make_circle_with_rng, CloudReplay, PointCloud,
};

fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("smallest_circle");
    let clouds = [
        ("disk", PointCloud::Disk { radius: 1.0 }),
        ("gaussian", PointCloud::Gaussian { sigma: 1.0 }),
        (
            "lattice",
            PointCloud::Lattice {
                spacing: 0.1,
                side: 32,
            },
        ),
    ];
    for &n in &[10usize, 100, 1000, 10000] {
        for (name, dist) in clouds {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                let pts = draw_points(dist, n, CloudReplay::new(43, n as u64));
                let mut rng = StdRng::seed_from_u64(44);
                b.iter(|| make_circle_with_rng(&pts, &mut rng))
            });
        }
    }
    group.bench_function(BenchmarkId::new("naive_disk", 10), |b| {
        b.iter_batched(
            || draw_points(PointCloud::Disk { radius: 1.0 }, 10, CloudReplay::new(45, 0)),
            |pts| make_circle_naive(&pts),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_circle);
criterion_main!(benches);
