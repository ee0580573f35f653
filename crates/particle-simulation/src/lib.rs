//! # Particle Simulation Engine
//!
//! CPU N-body simulation of point particles in the unit square, stepped at a
//! fixed rate and exposed as a flat buffer for rendering.

pub mod error;
pub mod params;
pub mod simulation;
pub mod timestep;

pub use error::*;
pub use params::*;
pub use simulation::*;
pub use timestep::*;
