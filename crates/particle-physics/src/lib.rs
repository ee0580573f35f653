//! # Particle Physics
//!
//! Particle record and force laws for a 2D point simulation confined to the
//! unit square: a spring toward the origin, pairwise inverse-square
//! attraction/repulsion and wall reflection.

pub mod constants;
pub mod forces;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use particle::*;
