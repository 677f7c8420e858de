//! Pedal deadzone and calibration
//!
//! Maps the primary pedal axis through a configurable center point and
//! symmetric deadzone into a signed directional intensity: travel above
//! the deadzone band accepts, travel below it deletes, and the distance
//! beyond the band scales to a 0-100 intensity that drives repeat speed.
//!
//! The mapping is total: out-of-range configurations clamp, degenerate
//! bands saturate, and no input value can fail.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod control;
pub mod types;

pub use control::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error(
        "Calibration violates deadzone < center <= max - deadzone: center={center}, deadzone={deadzone}, max={max}"
    )]
    InvariantViolated { center: u8, deadzone: u8, max: u8 },
}

pub type CalibrationResult<T> = Result<T, CalibrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_fields() {
        let err = CalibrationError::InvariantViolated {
            center: 10,
            deadzone: 20,
            max: 127,
        };
        let text = err.to_string();
        assert!(text.contains("center=10"));
        assert!(text.contains("deadzone=20"));
        assert!(text.contains("max=127"));
    }
}
