//! A single falling snowflake.

use glam::Vec2;

use crate::bounds::Elapsed;

/// A snowflake with a fixed size and fall speed.
///
/// Only the position changes over a particle's lifetime, and only through
/// [`Particle::advance`] and [`Particle::respawn`].
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in virtual pixels.
    position: Vec2,
    /// Sprite scale factor.
    size: f32,
    /// Fall speed in pixels per second.
    speed: f32,
}

impl Particle {
    /// Create a particle at `position` with a fixed `size` and `speed`.
    pub fn new(position: Vec2, size: f32, speed: f32) -> Self {
        Self {
            position,
            size,
            speed,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Move straight down by `speed * elapsed`.
    pub fn advance(&mut self, elapsed: Elapsed) {
        self.position.y += self.speed * elapsed.as_secs();
    }

    /// Put the particle back above the visible area at column `x`.
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_vertically_only() {
        let mut particle = Particle::new(Vec2::new(100.0, 0.0), 0.03, 20.0);
        particle.advance(Elapsed::from_secs(0.5).unwrap());
        assert_eq!(particle.position(), Vec2::new(100.0, 10.0));
    }

    #[test]
    fn test_respawn_keeps_size_and_speed() {
        let mut particle = Particle::new(Vec2::new(5.0, 700.0), 0.04, 33.0);
        particle.respawn(42.0, -50.0);
        assert_eq!(particle.position(), Vec2::new(42.0, -50.0));
        assert_eq!(particle.size(), 0.04);
        assert_eq!(particle.speed(), 33.0);
    }
}
