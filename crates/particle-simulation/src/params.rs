//! Simulation parameters for runtime tuning

use crate::error::{Error, Result};
use glam::Vec2;
use particle_physics::{constants::*, PairInteraction};
use rand::distr::Uniform;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    // Per-particle forces
    pub gravity: f32,
    pub wind_x: f32,
    pub wind_y: f32,
    /// Noise sampled from [-range, range] and added to each wind axis every step
    pub wind_noise_range: f32,
    /// Spring coefficient toward the origin
    pub pull_multiplier: f32,

    // Pairwise forces
    pub attraction_strength: f32,
    pub repulsion_strength: f32,
    /// Squared distance, not distance
    pub repulsion_distance_threshold: f32,
    /// Clamp for the pairwise force magnitude. `None` leaves it unbounded.
    pub max_force: Option<f32>,

    /// Seed for the instance RNG. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            wind_x: WIND_X,
            wind_y: WIND_Y,
            wind_noise_range: WIND_NOISE_RANGE,
            pull_multiplier: PULL_MULTIPLIER,
            attraction_strength: ATTRACTION_STRENGTH,
            repulsion_strength: REPULSION_STRENGTH,
            repulsion_distance_threshold: REPULSION_DISTANCE_THRESHOLD,
            max_force: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Every force zeroed. Particles coast and bounce off the walls.
    pub fn without_forces() -> Self {
        Self {
            gravity: 0.0,
            wind_x: 0.0,
            wind_y: 0.0,
            wind_noise_range: 0.0,
            pull_multiplier: 0.0,
            attraction_strength: 0.0,
            repulsion_strength: 0.0,
            repulsion_distance_threshold: 0.0,
            max_force: None,
            seed: None,
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_wind(mut self, wind_x: f32, wind_y: f32, noise_range: f32) -> Self {
        self.wind_x = wind_x;
        self.wind_y = wind_y;
        self.wind_noise_range = noise_range;
        self
    }

    pub fn with_pull(mut self, pull_multiplier: f32) -> Self {
        self.pull_multiplier = pull_multiplier;
        self
    }

    pub fn with_attraction(mut self, strength: f32) -> Self {
        self.attraction_strength = strength;
        self
    }

    pub fn with_repulsion(mut self, strength: f32, distance_threshold: f32) -> Self {
        self.repulsion_strength = strength;
        self.repulsion_distance_threshold = distance_threshold;
        self
    }

    pub fn with_max_force(mut self, max_force: Option<f32>) -> Self {
        self.max_force = max_force;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn wind(&self) -> Vec2 {
        Vec2::new(self.wind_x, self.wind_y)
    }

    pub fn pair_interaction(&self) -> PairInteraction {
        PairInteraction {
            attraction_strength: self.attraction_strength,
            repulsion_strength: self.repulsion_strength,
            repulsion_distance_threshold: self.repulsion_distance_threshold,
            max_force: self.max_force,
        }
    }

    /// Uniform noise over [-wind_noise_range, wind_noise_range]
    pub fn wind_noise(&self) -> Result<Uniform<f32>> {
        let range = self.wind_noise_range;
        Uniform::new_inclusive(-range, range).map_err(|e| {
            Error::InvalidArgument(format!("wind_noise_range {range} is not samplable: {e}"))
        })
    }

    /// Reject non-finite values, negative ranges and unsamplable noise
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("gravity", self.gravity),
            ("wind_x", self.wind_x),
            ("wind_y", self.wind_y),
            ("wind_noise_range", self.wind_noise_range),
            ("pull_multiplier", self.pull_multiplier),
            ("attraction_strength", self.attraction_strength),
            ("repulsion_strength", self.repulsion_strength),
            ("repulsion_distance_threshold", self.repulsion_distance_threshold),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.wind_noise_range < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "wind_noise_range must be >= 0, got {}",
                self.wind_noise_range
            )));
        }
        self.wind_noise()?;
        if self.repulsion_distance_threshold < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "repulsion_distance_threshold must be >= 0, got {}",
                self.repulsion_distance_threshold
            )));
        }
        if let Some(max) = self.max_force {
            if !max.is_finite() || max <= 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "max_force must be finite and > 0, got {max}"
                )));
            }
        }

        Ok(())
    }
}
