/*
 * Flocking Benchmark
 *
 * Measures the O(n^2) flocking step on its own and a full world tick
 * (flocking plus drift) at several school sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use lumina::params::InteractionMode;
use lumina::physics::{self, FlockingParams};
use lumina::population;
use lumina::{Bounds, SimulationConfig, Vec2, World};

const SCHOOL_SIZES: [usize; 3] = [100, 300, 1000];

fn bench_flocking_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("flocking_step");
    let bounds = Bounds::new(1280.0, 800.0);
    let params = FlockingParams::default();

    for &n in SCHOOL_SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut next_id = 0;
            let mut fish = population::populate_fish(n, 2.0, bounds, &mut next_id, &mut rng);
            let cursor = Some(Vec2::new(640.0, 400.0));

            b.iter(|| {
                physics::update_fish(
                    black_box(&mut fish),
                    cursor,
                    InteractionMode::Attract,
                    bounds,
                    &params,
                    &mut rng,
                );
            });
        });
    }

    group.finish();
}

fn bench_world_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");

    for &n in SCHOOL_SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let config = SimulationConfig { fish_count: n, seed: Some(42), ..SimulationConfig::default() };
            let mut world = World::new(config, Bounds::new(1280.0, 800.0));

            b.iter(|| {
                world.step();
                black_box(world.view());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flocking_step, bench_world_tick);
criterion_main!(benches);
