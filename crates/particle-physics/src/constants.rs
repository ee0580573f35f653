//! Default constants for the particle simulation
//!
//! Values are in normalized device units (the visible area spans [-1, 1] on
//! both axes) and seconds.

/// Downward acceleration
pub const GRAVITY: f32 = 0.1;

/// Mean wind acceleration along x
pub const WIND_X: f32 = 0.05;

/// Mean wind acceleration along y
pub const WIND_Y: f32 = 0.0;

/// Half-width of the uniform noise added to each wind component per step
pub const WIND_NOISE_RANGE: f32 = 0.01;

/// Spring coefficient pulling particles toward the origin.
/// The pull is linear in distance, so it is strongest near the walls.
pub const PULL_MULTIPLIER: f32 = 0.5;

/// Inverse-square coefficient between particles outside the repulsion cutoff
pub const ATTRACTION_STRENGTH: f32 = 1.0e-4;

/// Inverse-square coefficient between particles inside the repulsion cutoff.
/// Negative pushes the pair apart.
pub const REPULSION_STRENGTH: f32 = -1.0e-3;

/// Squared distance below which repulsion replaces attraction
pub const REPULSION_DISTANCE_THRESHOLD: f32 = 0.01;

/// Pairs whose squared distance is at or below this are skipped
pub const MIN_DISTANCE_SQUARED: f32 = 1.0e-4;

/// Half extent of the simulation box
pub const BOUNDARY: f32 = 1.0;
