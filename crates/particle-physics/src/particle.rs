//! Particle record shared with the renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// A point particle in the unit square.
///
/// Laid out as `{x, y, vx, vy}` so a slice of particles can be uploaded as a
/// vertex buffer without conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position (x, y)
    pub position: [f32; 2],
    /// Velocity (vx, vy)
    pub velocity: [f32; 2],
}

impl Particle {
    /// Size of one particle record in bytes
    pub const STRIDE: usize = std::mem::size_of::<Particle>();

    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position: position.to_array(),
            velocity: velocity.to_array(),
        }
    }

    /// Create a particle at rest
    pub fn at_rest(position: Vec2) -> Self {
        Self::new(position, Vec2::ZERO)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    pub fn vel(&self) -> Vec2 {
        Vec2::from_array(self.velocity)
    }

    pub fn set_pos(&mut self, position: Vec2) {
        self.position = position.to_array();
    }

    pub fn set_vel(&mut self, velocity: Vec2) {
        self.velocity = velocity.to_array();
    }

    /// Kinetic energy for unit mass
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel().length_squared()
    }

    /// True when both position components lie in [-BOUNDARY, BOUNDARY]
    pub fn in_bounds(&self) -> bool {
        self.position
            .iter()
            .all(|c| (-crate::constants::BOUNDARY..=crate::constants::BOUNDARY).contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_layout_is_four_floats() {
        assert_eq!(Particle::STRIDE, 16);
        let p = Particle::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&p));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn bounds_check_includes_walls() {
        assert!(Particle::at_rest(Vec2::new(1.0, -1.0)).in_bounds());
        assert!(!Particle::at_rest(Vec2::new(1.0001, 0.0)).in_bounds());
    }
}
