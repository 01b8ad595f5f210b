//! Validated inputs supplied by the host loop each tick.

use std::time::Duration;

use crate::error::FieldError;

/// Visible surface dimensions in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting zero, negative or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(FieldError::InvalidViewport { width, height })
        }
    }

    /// Derive a pixel viewport from a terminal grid of `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16, cell: CellMetrics) -> Result<Self, FieldError> {
        Self::new(cols as f32 * cell.width, rows as f32 * cell.height)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Time since the previous tick, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Elapsed(f32);

impl Elapsed {
    /// A tick in which no time passed.
    pub const ZERO: Elapsed = Elapsed(0.0);

    /// Create from seconds, rejecting negative, NaN and infinite values.
    pub fn from_secs(secs: f32) -> Result<Self, FieldError> {
        if secs.is_finite() && secs >= 0.0 {
            Ok(Self(secs))
        } else {
            Err(FieldError::InvalidElapsed(secs))
        }
    }

    /// Create from a duration. Durations are never negative.
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration.as_secs_f32())
    }

    pub fn as_secs(&self) -> f32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Virtual pixels covered by a single terminal cell.
///
/// Terminal cells are roughly twice as tall as they are wide, so the
/// default maps one cell to an 8x16 pixel block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

impl CellMetrics {
    /// Map a pixel position to the terminal cell containing it.
    /// Returns `None` for positions left of or above the grid origin.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = (x / self.width).floor();
        let row = (y / self.height).floor();
        if col > u16::MAX as f32 || row > u16::MAX as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rejects_bad_dimensions() {
        assert!(Viewport::new(800.0, 600.0).is_ok());
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 600.0).is_err());
        assert!(Viewport::new(800.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_viewport_from_cells() {
        let viewport = Viewport::from_cells(100, 30, CellMetrics::default()).unwrap();
        assert_eq!(viewport.width(), 800.0);
        assert_eq!(viewport.height(), 480.0);

        assert_eq!(
            Viewport::from_cells(0, 30, CellMetrics::default()),
            Err(FieldError::InvalidViewport {
                width: 0.0,
                height: 480.0
            })
        );
    }

    #[test]
    fn test_elapsed_validation() {
        assert_eq!(Elapsed::from_secs(0.5).unwrap().as_secs(), 0.5);
        assert!(Elapsed::from_secs(0.0).unwrap().is_zero());
        assert!(Elapsed::from_secs(-0.01).is_err());
        assert!(Elapsed::from_secs(f32::NAN).is_err());
        assert!(Elapsed::from_secs(f32::INFINITY).is_err());
    }

    #[test]
    fn test_elapsed_from_duration() {
        let elapsed = Elapsed::from_duration(Duration::from_millis(250));
        assert!((elapsed.as_secs() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_cell_at() {
        let cell = CellMetrics::default();
        assert_eq!(cell.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(cell.cell_at(25.0, 33.0), Some((3, 2)));
        assert_eq!(cell.cell_at(10.0, -50.0), None);
        assert_eq!(cell.cell_at(f32::NAN, 10.0), None);
    }
}
