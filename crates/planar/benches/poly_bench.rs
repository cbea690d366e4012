//! Criterion benchmarks for the polygon aggregate.
//! Focus sizes: n in {3, 10, 100, 1000} vertices.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::sample::{draw_polygon_radial, RadialCfg, ReplayToken};
use planar::Polygon;

fn sampled(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: n,
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: n as u64 })
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[3usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("centroid", n), &n, |b, &n| {
            b.iter_batched(
                || sampled(n, 43),
                |p| {
                    let _c = p.centroid().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("signed_area", n), &n, |b, &n| {
            b.iter_batched(
                || sampled(n, 44),
                |p| {
                    let _a = p.signed_area().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("translate_center_to", n), &n, |b, &n| {
            b.iter_batched(
                || sampled(n, 45),
                |mut p| {
                    p.translate_center_to(planar::point2(1.0, -1.0)).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
