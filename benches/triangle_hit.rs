use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{Rng as _, SeedableRng as _, rngs::SmallRng};
use std::hint::black_box;

use trihit::{
    HitRecord, Hittable, HittableList, Interval, MaterialIdx, Ray, Triangle,
    geometry::{WorldPoint, WorldVector},
};

fn unit_triangle() -> Triangle {
    Triangle::new(
        WorldPoint::new(0.0, 0.0, 0.0),
        WorldPoint::new(1.0, 0.0, 0.0),
        WorldPoint::new(0.0, 1.0, 0.0),
        MaterialIdx::from_raw(0),
    )
}

/// Strip of triangles along the X axis, each one unit wide.
fn triangle_strip(count: usize) -> HittableList {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Triangle::new(
                WorldPoint::new(x, 0.0, 0.0),
                WorldPoint::new(x + 1.0, 0.0, 0.0),
                WorldPoint::new(x, 1.0, 0.0),
                MaterialIdx::from_raw(0),
            )
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let triangle = unit_triangle();
    let ray_t = Interval::from_min(0.001);
    let down = WorldVector::new(0.0, 0.0, -1.0);

    let hit_ray = Ray::new(WorldPoint::new(0.25, 0.25, 1.0), down);
    c.bench_function("triangle_hit", |b| {
        b.iter(|| {
            let mut rec = HitRecord::default();
            black_box(triangle.hit(black_box(&hit_ray), ray_t, &mut rec));
            rec
        })
    });

    let miss_ray = Ray::new(WorldPoint::new(2.0, 2.0, 1.0), down);
    c.bench_function("triangle_miss_outside", |b| {
        b.iter(|| {
            let mut rec = HitRecord::default();
            black_box(triangle.hit(black_box(&miss_ray), ray_t, &mut rec))
        })
    });

    let parallel_ray = Ray::new(
        WorldPoint::new(-1.0, 0.25, 1.0),
        WorldVector::new(1.0, 0.0, 0.0),
    );
    c.bench_function("triangle_miss_parallel", |b| {
        b.iter(|| {
            let mut rec = HitRecord::default();
            black_box(triangle.hit(black_box(&parallel_ray), ray_t, &mut rec))
        })
    });

    let strip = triangle_strip(100);
    let mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("triangle_strip_100", |b| {
        b.iter_batched(
            || {
                Ray::new(
                    WorldPoint::new(rng.random_range(0.0..100.0), rng.random_range(0.0..1.0), 1.0),
                    down,
                )
            },
            |ray| strip.intersect(&ray, ray_t),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
