//! # Advance Benchmark
//!
//! Measures one `advance` call across particle counts. The pairwise pass
//! dominates, so time should grow roughly with the square of the count.
//!
//! Run with: `cargo bench -p particle-simulation`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_simulation::{ParticleSimulation, SimulationConfig};
use std::hint::black_box;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    group.sample_size(10);

    for count in [500usize, 2_000, 10_000] {
        let config = SimulationConfig::default().with_seed(42);
        let Ok(mut sim) = ParticleSimulation::new(count, config) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                sim.advance(black_box(1.0 / 60.0));
                black_box(sim.as_bytes().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
