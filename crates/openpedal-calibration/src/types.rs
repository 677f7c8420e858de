//! Calibration type definitions

use serde::{Deserialize, Serialize};

use crate::{CalibrationError, CalibrationResult};

/// Center point and deadzone for the primary pedal axis.
///
/// Invariant: `deadzone < center` and `center + deadzone <= max_axis_value`.
/// Configurations that violate it degrade gracefully — [`effective`](Self::effective)
/// clamps rather than fails — while [`validate`](Self::validate) reports the
/// violation for host-side configuration UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Resting position of the pedal.
    pub center: u8,
    /// Half-width of the no-action band around the center.
    pub deadzone: u8,
}

impl CalibrationConfig {
    pub fn new(center: u8, deadzone: u8) -> Self {
        Self { center, deadzone }
    }

    /// Checks the calibration invariant against a device's maximum axis value.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvariantViolated`] when the deadzone band
    /// does not fit strictly inside `(0, max)` around the center.
    pub fn validate(&self, max: u8) -> CalibrationResult<()> {
        if self.deadzone < self.center
            && self.center <= max
            && u16::from(self.center) + u16::from(self.deadzone) <= u16::from(max)
        {
            Ok(())
        } else {
            Err(CalibrationError::InvariantViolated {
                center: self.center,
                deadzone: self.deadzone,
                max,
            })
        }
    }

    /// Clamped center and deadzone that always satisfy the invariant.
    ///
    /// The center lands in `[1, max-1]` and the deadzone shrinks until the
    /// band fits; a violating configuration thus degrades to the nearest
    /// usable one instead of failing.
    pub fn effective(&self, max: u8) -> (u8, u8) {
        let max = max.max(2);
        let center = self.center.clamp(1, max - 1);
        let deadzone = self.deadzone.min(center - 1).min(max - center);
        (center, deadzone)
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        // Resting center of an 8-bit axis with enough slack to absorb
        // mechanical jitter on a worn pedal spring.
        Self {
            center: 127,
            deadzone: 10,
        }
    }
}

/// Which repeat stream the pedal currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedalDirection {
    /// Pedal pressed past the band: accept stream.
    Accepting,
    /// Pedal lifted past the band: delete stream.
    Deleting,
    /// Within the deadzone band.
    Idle,
}

/// Derived control state: direction plus 0-100 intensity.
///
/// Never stored; recomputed from each normalized snapshot. `Idle` always
/// pairs with intensity 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub direction: PedalDirection,
    pub intensity: u8,
}

impl ControlState {
    pub fn idle() -> Self {
        Self {
            direction: PedalDirection::Idle,
            intensity: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.direction == PedalDirection::Idle
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::idle()
    }
}
