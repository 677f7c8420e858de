//! Type definitions for the foot pedal protocol

use serde::{Deserialize, Serialize};

use crate::AXIS_COUNT;

/// Report layout for a supported pedal device.
///
/// Describes where the three analog axes live inside the input report and
/// the maximum value each axis can report. Offsets are fixed per device
/// family; the byte at offset 0 is the report ID on both built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Byte offsets of the primary, secondary, and tertiary axes.
    pub axis_offsets: [usize; AXIS_COUNT],
    /// Maximum axis value the device reports (255 or 127).
    pub max_axis_value: u8,
}

impl DeviceProfile {
    /// Profile for devices with full 8-bit axis resolution (0-255).
    pub fn eight_bit() -> Self {
        Self {
            axis_offsets: [1, 2, 3],
            max_axis_value: 255,
        }
    }

    /// Profile for devices reporting 7-bit axis values (0-127).
    pub fn seven_bit() -> Self {
        Self {
            axis_offsets: [1, 2, 3],
            max_axis_value: 127,
        }
    }

    /// Minimum report length that carries all three axes.
    pub fn report_len(&self) -> usize {
        self.axis_offsets
            .iter()
            .map(|offset| offset + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::eight_bit()
    }
}

/// Canonical snapshot of the three pedal axes.
///
/// Produced at most once per distinct input report; a new snapshot
/// supersedes the previous one atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PedalState {
    /// Rocking pedal driving accept/delete streams.
    pub primary: u8,
    /// Left auxiliary pedal (speech-to-text toggle axis).
    pub secondary: u8,
    /// Right auxiliary pedal (text-to-speech toggle axis).
    pub tertiary: u8,
}

impl PedalState {
    pub fn new(primary: u8, secondary: u8, tertiary: u8) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}
