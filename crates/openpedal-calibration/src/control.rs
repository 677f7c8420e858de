//! Directional intensity derivation

use crate::{CalibrationConfig, ControlState, PedalDirection};

/// Derive direction and intensity from a primary-axis value.
///
/// Values within `[center - deadzone, center + deadzone]` (inclusive) are
/// idle. Above the band the pedal accepts, below it deletes; in both cases
/// intensity scales linearly with the distance beyond the band edge,
/// reaching 100 at the end of travel. Degenerate bands (a band edge at 0 or
/// at `max`) saturate at 100 instead of dividing by zero.
pub fn control_state_for(value: u8, config: &CalibrationConfig, max: u8) -> ControlState {
    let max = max.max(2);
    let (center, deadzone) = config.effective(max);
    let value = value.min(max);

    let lower = center - deadzone;
    let upper = center + deadzone;

    if value >= lower && value <= upper {
        return ControlState::idle();
    }

    if value > upper {
        ControlState {
            direction: PedalDirection::Accepting,
            intensity: scaled_intensity(value - upper, max - upper),
        }
    } else {
        ControlState {
            direction: PedalDirection::Deleting,
            intensity: scaled_intensity(lower - value, lower),
        }
    }
}

/// `round(100 * distance / span)` clamped to `[0, 100]`, saturating when the
/// span is empty.
fn scaled_intensity(distance: u8, span: u8) -> u8 {
    if span == 0 {
        return 100;
    }
    let distance = u32::from(distance);
    let span = u32::from(span);
    let scaled = (100 * distance + span / 2) / span;
    scaled.min(100) as u8
}
