//! CPU particle simulation
//!
//! One `advance` is three passes over the particle set:
//! 1. per-particle forces: gravity, noisy wind, pull toward the origin
//! 2. pairwise inverse-square forces over every unordered pair
//! 3. position integration and wall reflection
//!
//! All passes update velocities in place (semi-implicit Euler), so pass 3
//! moves each particle with the velocity produced by passes 1 and 2.

use crate::error::{Error, Result};
use crate::params::SimulationConfig;
use crate::timestep::FixedTimestep;
use glam::Vec2;
use particle_physics::{center_pull, reflect_off_walls, Particle};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;

/// Particle simulation owning its particles and random source
pub struct ParticleSimulation {
    particles: Vec<Particle>,
    config: SimulationConfig,
    rng: StdRng,
    wind_noise: Uniform<f32>,

    tick: u64,
    elapsed: f64,
}

impl ParticleSimulation {
    /// Create `count` particles with position and velocity drawn uniformly
    /// from [-1, 1] on each axis.
    ///
    /// `count` accepts any integer type; negative values are rejected rather
    /// than clamped.
    pub fn new<C>(count: C, config: SimulationConfig) -> Result<Self>
    where
        C: TryInto<usize> + Copy + Display,
    {
        let count: usize = count.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "particle count must be a non-negative integer, got {count}"
            ))
        })?;
        config.validate()?;

        let mut rng = Self::seeded_rng(config.seed);
        let particles = (0..count)
            .map(|_| {
                let x = rng.random_range(-1.0..1.0);
                let y = rng.random_range(-1.0..1.0);
                let vx = rng.random_range(-1.0..1.0);
                let vy = rng.random_range(-1.0..1.0);
                Particle::new(Vec2::new(x, y), Vec2::new(vx, vy))
            })
            .collect();

        Self::with_rng(particles, config, rng)
    }

    /// Create a simulation from an explicit initial state
    pub fn from_particles(particles: Vec<Particle>, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = Self::seeded_rng(config.seed);
        Self::with_rng(particles, config, rng)
    }

    fn with_rng(particles: Vec<Particle>, config: SimulationConfig, rng: StdRng) -> Result<Self> {
        let wind_noise = config.wind_noise()?;

        log::info!("Initialized {} particles", particles.len());
        log::info!("  Particle struct size: {} bytes", Particle::STRIDE);

        Ok(Self {
            particles,
            config,
            rng,
            wind_noise,
            tick: 0,
            elapsed: 0.0,
        })
    }

    fn seeded_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// Step the simulation by `dt` seconds.
    ///
    /// Zero, negative or non-finite `dt` is a no-op and leaves the random
    /// source untouched.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.particles.is_empty() {
            return;
        }

        self.apply_particle_forces(dt);
        self.apply_pair_forces(dt);
        self.integrate(dt);

        self.tick += 1;
        self.elapsed += f64::from(dt);
    }

    /// Feed one frame's wall time through `timestep` and run every step it
    /// releases. Returns the number of steps run.
    pub fn advance_frame(&mut self, timestep: &mut FixedTimestep, frame_dt: f32) -> usize {
        let steps = timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.advance(timestep.step());
        }
        log::debug!("frame_dt={:.4}s steps={} tick={}", frame_dt, steps, self.tick);
        steps
    }

    fn apply_particle_forces(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        let wind = self.config.wind();
        let pull = self.config.pull_multiplier;

        for p in &mut self.particles {
            let noise = Vec2::new(
                self.wind_noise.sample(&mut self.rng),
                self.wind_noise.sample(&mut self.rng),
            );

            let mut vel = p.vel();
            vel.y -= gravity * dt;
            vel += (wind + noise) * dt;
            vel += center_pull(p.pos(), pull) * dt;
            p.set_vel(vel);
        }
    }

    // Each pair touches only particles i and j, so disjoint i-ranges could
    // be split across threads with per-thread velocity accumulators.
    fn apply_pair_forces(&mut self, dt: f32) {
        let law = self.config.pair_interaction();

        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let a = &mut head[i];

            for b in tail.iter_mut() {
                let impulse = law.force(a.pos(), b.pos()) * dt;
                a.set_vel(a.vel() + impulse);
                b.set_vel(b.vel() - impulse);
            }
        }
    }

    fn integrate(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.set_pos(p.pos() + p.vel() * dt);
            reflect_off_walls(p);
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Bytes per particle record in `as_bytes`
    pub fn particle_stride(&self) -> usize {
        Particle::STRIDE
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particle buffer as raw bytes, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of steps taken with a positive `dt`
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> Vec2 {
        self.particles.iter().map(Particle::vel).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_within_unit_square() -> Result<()> {
        let sim = ParticleSimulation::new(500, SimulationConfig::default().with_seed(1))?;
        assert_eq!(sim.particle_count(), 500);
        for p in sim.particles() {
            assert!(p.in_bounds());
            assert!(p.velocity.iter().all(|v| (-1.0..=1.0).contains(v)));
        }
        Ok(())
    }

    #[test]
    fn byte_view_matches_count_and_stride() -> Result<()> {
        let sim = ParticleSimulation::new(7_u32, SimulationConfig::default().with_seed(2))?;
        assert_eq!(sim.config().seed, Some(2));
        assert_eq!(sim.particle_stride(), 16);
        assert_eq!(sim.as_bytes().len(), 7 * sim.particle_stride());
        Ok(())
    }

    #[test]
    fn tick_and_elapsed_track_real_steps_only() -> Result<()> {
        let mut sim = ParticleSimulation::new(3, SimulationConfig::default().with_seed(3))?;
        sim.advance(0.5);
        sim.advance(0.0);
        sim.advance(-1.0);
        sim.advance(0.25);
        assert_eq!(sim.tick(), 2);
        assert_eq!(sim.elapsed(), 0.75);
        Ok(())
    }

    #[test]
    fn advance_frame_runs_released_steps() -> Result<()> {
        let mut sim = ParticleSimulation::new(4, SimulationConfig::default().with_seed(4))?;
        let mut timestep = FixedTimestep::new(0.25)?;
        assert_eq!(sim.advance_frame(&mut timestep, 0.625), 2);
        assert_eq!(sim.tick(), 2);
        assert_eq!(sim.advance_frame(&mut timestep, 0.0625), 0);
        assert_eq!(sim.tick(), 2);
        Ok(())
    }
}
