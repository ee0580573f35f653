//! 2D Particle Simulation
//!
//! Headless host for the simulation: runs the fixed timestep loop against
//! wall-clock time and reports what a renderer would upload each frame.

use particle_simulation::{FixedTimestep, ParticleSimulation, SimulationConfig};
use std::thread;
use std::time::{Duration, Instant};

const PARTICLE_COUNT: usize = 1000;
const TICK_RATE_HZ: f32 = 60.0;
const MAX_STEPS_PER_FRAME: usize = 8;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const RUN_DURATION: Duration = Duration::from_secs(5);

fn run() -> particle_simulation::Result<()> {
    let mut simulation = ParticleSimulation::new(PARTICLE_COUNT, SimulationConfig::default())?;
    let mut timestep =
        FixedTimestep::from_hz(TICK_RATE_HZ)?.with_max_steps_per_frame(MAX_STEPS_PER_FRAME);
    log::info!("✓ Simulation initialized");
    log::info!("  Tick: {:.4}s ({} Hz)", timestep.step(), TICK_RATE_HZ);

    let start = Instant::now();
    let mut last_frame = start;
    let mut last_report = start;
    let mut frames = 0u32;
    let mut uploaded_bytes = 0usize;

    while start.elapsed() < RUN_DURATION {
        let now = Instant::now();
        let frame_dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        simulation.advance_frame(&mut timestep, frame_dt);

        // Stand-in for the vertex buffer upload
        let bytes = simulation.as_bytes();
        debug_assert_eq!(
            bytes.len(),
            simulation.particle_count() * simulation.particle_stride()
        );
        uploaded_bytes += bytes.len();
        frames += 1;

        if last_report.elapsed() >= Duration::from_secs(1) {
            let escaped = simulation
                .particles()
                .iter()
                .filter(|p| !p.in_bounds())
                .count();
            log::info!(
                "t={:.2}s ticks={} fps={} energy={:.4} escaped={}",
                simulation.elapsed(),
                simulation.tick(),
                frames,
                simulation.kinetic_energy(),
                escaped
            );
            frames = 0;
            last_report = Instant::now();
        }

        thread::sleep(FRAME_INTERVAL);
    }

    log::info!(
        "Finished after {} ticks, {:.1} MiB streamed",
        simulation.tick(),
        uploaded_bytes as f64 / (1024.0 * 1024.0)
    );
    Ok(())
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting 2D particle simulation...");

    if let Err(e) = run() {
        log::error!("Simulation failed: {e}");
        std::process::exit(1);
    }
}
