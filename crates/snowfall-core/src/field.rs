//! The snowflake pool and its per-tick update.

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

use crate::bounds::{Elapsed, Viewport};
use crate::error::FieldError;
use crate::particle::Particle;
use crate::settings::FieldSettings;

/// Outcome of a single [`ParticleField::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Particles that crossed the bottom edge and were sent back to the top.
    pub respawned: usize,
}

/// A fixed-size population of falling particles.
///
/// The field never grows or shrinks after construction. Updates are
/// independent per particle, so the iteration order of [`step`] carries no
/// meaning; [`for_each`] visits particles in insertion order.
///
/// [`step`]: ParticleField::step
/// [`for_each`]: ParticleField::for_each
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Vertical position assigned on respawn.
    respawn_offset: f32,
}

impl ParticleField {
    /// Generate a field from `settings`, scattered uniformly over `viewport`.
    pub fn new<R: Rng + ?Sized>(
        settings: &FieldSettings,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        settings.validate()?;
        Ok(Self::generate(settings, viewport, rng))
    }

    /// Generate `count` particles using the reference size and speed ranges.
    pub fn create<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let settings = FieldSettings {
            count,
            ..Default::default()
        };
        Self::generate(&settings, viewport, rng)
    }

    /// Build a field from already constructed particles.
    pub fn from_particles(particles: Vec<Particle>, respawn_offset: f32) -> Self {
        Self {
            particles,
            respawn_offset,
        }
    }

    fn generate<R: Rng + ?Sized>(
        settings: &FieldSettings,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let particles: Vec<Particle> = (0..settings.count)
            .map(|_| {
                let x = rng.gen_range(0.0..viewport.width());
                let y = rng.gen_range(0.0..viewport.height());
                let size = rng.gen_range(settings.size_hundredths.clone()) as f32 / 100.0;
                let speed = rng.gen_range(settings.speed.clone()) as f32;
                Particle::new(Vec2::new(x, y), size, speed)
            })
            .collect();

        debug!(
            "generated {} particles over {}x{} viewport",
            particles.len(),
            viewport.width(),
            viewport.height()
        );

        Self {
            particles,
            respawn_offset: settings.respawn_offset,
        }
    }

    /// Advance every particle by `elapsed` and recycle those that fell below
    /// the bottom of `viewport`.
    ///
    /// The viewport is taken per call so that a resized surface is honoured
    /// immediately. Afterwards every particle satisfies
    /// `position.y <= viewport.height()`.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        elapsed: Elapsed,
        viewport: Viewport,
        rng: &mut R,
    ) -> StepStats {
        let height = viewport.height();
        // A positive offset larger than a tiny viewport would break the bound.
        let respawn_y = self.respawn_offset.min(height);
        let mut stats = StepStats::default();

        for particle in &mut self.particles {
            particle.advance(elapsed);
            if particle.position().y > height {
                particle.respawn(rng.gen_range(0.0..viewport.width()), respawn_y);
                stats.respawned += 1;
            }
        }

        if stats.respawned > 0 {
            trace!("respawned {} particles", stats.respawned);
        }
        stats
    }

    /// Visit every particle in insertion order.
    pub fn for_each<F: FnMut(&Particle)>(&self, visit: F) {
        self.particles.iter().for_each(visit);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn respawn_offset(&self) -> f32 {
        self.respawn_offset
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
