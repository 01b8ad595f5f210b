//! Error types for the simulation boundary.

use std::fmt;

/// Errors raised when malformed values reach the simulation boundary.
///
/// The simulation itself never fails; these are produced only while
/// constructing the validated input types.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Viewport dimensions were zero, negative or not finite.
    InvalidViewport { width: f32, height: f32 },
    /// Elapsed time was negative or not finite.
    InvalidElapsed(f32),
    /// Field settings describe an impossible population.
    InvalidSettings(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidViewport { width, height } => {
                write!(
                    f,
                    "Invalid viewport {}x{}: dimensions must be positive and finite",
                    width, height
                )
            }
            FieldError::InvalidElapsed(secs) => {
                write!(
                    f,
                    "Invalid elapsed time {}s: must be non-negative and finite",
                    secs
                )
            }
            FieldError::InvalidSettings(msg) => write!(f, "Invalid field settings: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {}
