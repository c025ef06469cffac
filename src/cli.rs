use std::{collections::HashMap, thread, time::Instant};

use bon::Builder;
use rand::{SeedableRng as _, rngs::SmallRng};
use rand_distr::Distribution as _;

use trihit::{
    Hittable, HittableList, Interval, MaterialIdx, MaterialTable, Ray, Sphere, Triangle,
    geometry::{FloatType, WorldPoint, WorldVector},
    util::HitStats,
};

/// Settings of the random ray probe.
#[derive(Debug, Builder)]
struct ProbeSettings {
    #[builder(default = 1_000_000)]
    ray_count: usize,

    /// Lower end of the accepted ray parameter range
    #[builder(default = 0.001)]
    t_min: FloatType,

    /// Rays start on a sphere of this radius around the scene
    #[builder(default = 6.0)]
    source_distance: FloatType,

    #[builder(default = 0x5eed)]
    seed: u64,

    /// Defaults to the number of CPUs
    worker_count: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let settings = ProbeSettings::builder().build();
    let (scene, materials) = demo_scene();
    let worker_count = settings.worker_count.unwrap_or_else(num_cpus::get).max(1);

    println!("{settings:?}");
    println!(
        "Scene: {} objects, {} materials, bounds {:?} - {:?}",
        scene.len(),
        materials.len(),
        scene.bounding_box().min,
        scene.bounding_box().max
    );

    let start = Instant::now();
    let results = thread::scope(|s| {
        let handles: Vec<_> = (0..worker_count)
            .map(|worker_id| {
                let scene = &scene;
                let settings = &settings;
                s.spawn(move || trace_batch(scene, settings, worker_id, worker_count))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| anyhow::anyhow!("Worker thread panicked"))
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;
    let elapsed = start.elapsed();

    let mut stats = HitStats::default();
    let mut material_hits = HashMap::<MaterialIdx, usize>::new();
    for (worker_stats, worker_material_hits) in results {
        stats = stats.merge(&worker_stats);
        for (material, count) in worker_material_hits {
            *material_hits.entry(material).or_default() += count;
        }
    }

    println!("{stats}");

    let mut material_hits: Vec<_> = material_hits.into_iter().collect();
    material_hits.sort_by_key(|(material, _)| *material);
    for (material, count) in material_hits {
        println!("  {}: {} hits", materials.get(material)?, count);
    }

    println!(
        "{} workers, {:.2?}, {:.1} Mrays/s",
        worker_count,
        elapsed,
        stats.rays as f64 / elapsed.as_secs_f64() / 1e6
    );

    Ok(())
}

/// Traces this worker's share of the random rays.
fn trace_batch(
    scene: &HittableList,
    settings: &ProbeSettings,
    worker_id: usize,
    worker_count: usize,
) -> (HitStats, HashMap<MaterialIdx, usize>) {
    let mut ray_count = settings.ray_count / worker_count;
    if worker_id == 0 {
        ray_count += settings.ray_count % worker_count;
    }

    let mut rng = SmallRng::seed_from_u64(settings.seed.wrapping_add(worker_id as u64));
    let ray_t = Interval::from_min(settings.t_min);
    let mut stats = HitStats::default();
    let mut material_hits = HashMap::new();

    for _ in 0..ray_count {
        let ray = random_ray(&mut rng, settings.source_distance);
        let hit = scene.intersect(&ray, ray_t);
        stats.record(hit.as_ref());
        if let Some(rec) = hit {
            *material_hits.entry(rec.material).or_default() += 1;
        }
    }

    (stats, material_hits)
}

/// Ray from a random point around the scene towards a random point near its center.
fn random_ray(rng: &mut impl rand::Rng, source_distance: FloatType) -> Ray {
    let source: [FloatType; 3] = rand_distr::UnitSphere.sample(rng);
    let origin = WorldPoint::from(WorldVector::from(source) * source_distance);
    let target = WorldPoint::new(
        rng.random_range(-1.5..1.5),
        rng.random_range(-1.5..1.5),
        rng.random_range(-1.5..1.5),
    );

    Ray::new(origin, target - origin)
}

/// Ground plane made of two triangles, a tetrahedron and a sphere.
fn demo_scene() -> (HittableList, MaterialTable<&'static str>) {
    let mut materials = MaterialTable::new();
    let ground = materials.push("ground");
    let facets = materials.push("tetrahedron");
    let ball = materials.push("sphere");

    let mut scene = HittableList::new();

    let corners = [
        WorldPoint::new(-3.0, -1.0, 3.0),
        WorldPoint::new(3.0, -1.0, 3.0),
        WorldPoint::new(3.0, -1.0, -3.0),
        WorldPoint::new(-3.0, -1.0, -3.0),
    ];
    scene.add(Triangle::new(corners[0], corners[1], corners[2], ground));
    scene.add(Triangle::new(corners[0], corners[2], corners[3], ground));

    let apex = WorldPoint::new(0.0, 1.0, 0.0);
    let base = [
        WorldPoint::new(-1.0, -0.9, 0.6),
        WorldPoint::new(1.0, -0.9, 0.6),
        WorldPoint::new(0.0, -0.9, -1.1),
    ];
    let tetrahedron: HittableList = [
        Triangle::new(base[0], base[1], apex, facets),
        Triangle::new(base[1], base[2], apex, facets),
        Triangle::new(base[2], base[0], apex, facets),
        Triangle::new(base[0], base[2], base[1], facets),
    ]
    .into_iter()
    .collect();
    scene.add(tetrahedron);

    scene.add(Sphere::new(WorldPoint::new(1.8, -0.5, 1.2), 0.5, ball));

    (scene, materials)
}
