//! Particle simulation core for the snowfall screensaver.
//!
//! This crate owns the only real logic of the application: a fixed-size
//! pool of falling snowflakes that advance at constant speed and are
//! recycled to the top of the viewport once they drop past the bottom edge.
//! It has no knowledge of terminals, clocks or input; the shell feeds it
//! validated [`Elapsed`] and [`Viewport`] values and a random source.

mod bounds;
mod error;
mod field;
mod particle;
mod settings;

pub use bounds::{CellMetrics, Elapsed, Viewport};
pub use error::FieldError;
pub use field::{ParticleField, StepStats};
pub use particle::Particle;
pub use settings::FieldSettings;

pub use glam::Vec2;
