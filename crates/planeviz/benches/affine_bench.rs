//! Criterion benchmarks for the grid visualizer recompute.
//! Focus sizes: lattice extent in {5, 10, 20, 40}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use planeviz::affine::{affine_frame, compose_matrix, eigen, AffineParams};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine");
    for &extent in &[5i32, 10, 20, 40] {
        group.bench_with_input(BenchmarkId::new("affine_frame", extent), &extent, |b, &e| {
            let params = AffineParams {
                skew_x: 0.4,
                skew_y: -0.3,
                rotation_deg: 30.0,
                translation: Vector2::new(1.0, -2.0),
                extent: e,
            };
            b.iter(|| affine_frame(&params))
        });
    }

    let mut rng = StdRng::seed_from_u64(43);
    let mats: Vec<_> = (0..256)
        .map(|_| {
            compose_matrix(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-180.0..180.0),
            )
        })
        .collect();
    group.bench_function("eigen_x256", |b| {
        b.iter(|| mats.iter().map(eigen).filter(|r| r.is_real()).count())
    });
    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
