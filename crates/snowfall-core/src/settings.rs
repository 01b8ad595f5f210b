//! Population parameters for a particle field.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Parameters controlling how particles are generated and recycled.
///
/// The defaults are the reference screensaver: 600 flakes, sizes of
/// 0.02 to 0.04, speeds of 10 to 49 pixels per second, respawning 50
/// pixels above the top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Number of particles in the field.
    pub count: usize,
    /// Size draw range in hundredths (end exclusive).
    pub size_hundredths: Range<u32>,
    /// Speed draw range in whole pixels per second (end exclusive).
    pub speed: Range<u32>,
    /// Vertical position assigned on respawn.
    pub respawn_offset: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 600,
            size_hundredths: 2..5,
            speed: 10..50,
            respawn_offset: -50.0,
        }
    }
}

impl FieldSettings {
    /// Check that the settings describe a population that can be generated.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.count == 0 {
            return Err(FieldError::InvalidSettings(
                "count must be at least 1".to_string(),
            ));
        }
        if self.size_hundredths.is_empty() {
            return Err(FieldError::InvalidSettings(format!(
                "size range {:?} is empty",
                self.size_hundredths
            )));
        }
        if self.speed.is_empty() {
            return Err(FieldError::InvalidSettings(format!(
                "speed range {:?} is empty",
                self.speed
            )));
        }
        if !self.respawn_offset.is_finite() {
            return Err(FieldError::InvalidSettings(
                "respawn offset must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = FieldSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.count, 600);
        assert_eq!(settings.respawn_offset, -50.0);
    }

    #[test]
    fn test_validate_rejects_empty_population() {
        let settings = FieldSettings {
            count: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = FieldSettings {
            speed: 50..50,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = FieldSettings {
            size_hundredths: 3..3,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = FieldSettings {
            respawn_offset: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
