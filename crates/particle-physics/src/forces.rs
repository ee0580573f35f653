//! Force laws acting on particles
//!
//! All particles have unit mass, so every function here returns an
//! acceleration that the integrator scales by `dt`.

use crate::constants::*;
use crate::particle::Particle;
use glam::Vec2;

/// Linear spring toward the origin
/// F = -k * r
///
/// The magnitude grows with distance from the center.
pub fn center_pull(position: Vec2, pull_multiplier: f32) -> Vec2 {
    -position * pull_multiplier
}

/// Coefficients for the pairwise inverse-square interaction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairInteraction {
    /// Coefficient used when the pair is outside the repulsion cutoff
    pub attraction_strength: f32,
    /// Coefficient used inside the cutoff (negative repels)
    pub repulsion_strength: f32,
    /// Squared distance below which repulsion applies
    pub repulsion_distance_threshold: f32,
    /// Optional clamp on the force magnitude
    pub max_force: Option<f32>,
}

impl Default for PairInteraction {
    fn default() -> Self {
        Self {
            attraction_strength: ATTRACTION_STRENGTH,
            repulsion_strength: REPULSION_STRENGTH,
            repulsion_distance_threshold: REPULSION_DISTANCE_THRESHOLD,
            max_force: None,
        }
    }
}

impl PairInteraction {
    /// Signed inverse-square magnitude for a pair at squared distance `d2`
    /// F = strength / d²
    pub fn magnitude(&self, d2: f32) -> f32 {
        let strength = if d2 < self.repulsion_distance_threshold {
            self.repulsion_strength
        } else {
            self.attraction_strength
        };

        let force = strength / d2;
        match self.max_force {
            Some(max) => force.clamp(-max, max),
            None => force,
        }
    }

    /// Force on the particle at `from` due to the particle at `to`.
    ///
    /// Positive magnitudes point from `from` toward `to`. The partner receives
    /// the exact negation. Returns zero for pairs at or inside
    /// `MIN_DISTANCE_SQUARED`.
    pub fn force(&self, from: Vec2, to: Vec2) -> Vec2 {
        let delta = to - from;
        let d2 = delta.length_squared();

        if d2 <= MIN_DISTANCE_SQUARED {
            return Vec2::ZERO;
        }

        let force = self.magnitude(d2);
        (delta / d2.sqrt()) * force
    }
}

/// Reflect a particle off the walls of the [-BOUNDARY, BOUNDARY]² box.
///
/// A component moving outward past a wall is clamped to the wall and its
/// velocity negated. A component already heading back inward is only
/// clamped, so positions never leave the box.
pub fn reflect_off_walls(particle: &mut Particle) {
    for axis in 0..2 {
        let pos = &mut particle.position[axis];
        let vel = &mut particle.velocity[axis];

        if *pos >= BOUNDARY && *vel > 0.0 {
            *pos = BOUNDARY;
            *vel = -*vel;
        } else if *pos <= -BOUNDARY && *vel < 0.0 {
            *pos = -BOUNDARY;
            *vel = -*vel;
        }

        *pos = pos.clamp(-BOUNDARY, BOUNDARY);
    }
}
