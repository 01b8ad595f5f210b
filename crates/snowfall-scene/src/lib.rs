//! Terminal rendering for the snowfall screensaver.
//!
//! A [`Scene`] paints one frame: a [`Background`] fill covering the whole
//! terminal, then a glyph for every particle of a
//! [`ParticleField`](snowfall_core::ParticleField) that lands on the grid.

mod background;
mod chars;
mod color;
mod scene;

pub use background::Background;
pub use scene::Scene;
