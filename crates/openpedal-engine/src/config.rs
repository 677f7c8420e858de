//! Control loop configuration

use openpedal_calibration::CalibrationConfig;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::ports::ConfigSource;

/// Crossing thresholds for the two auxiliary pedals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleThresholds {
    /// Secondary axis threshold: speech-to-text capture.
    pub speech_to_text: u8,
    /// Tertiary axis threshold: text-to-speech playback.
    pub text_to_speech: u8,
}

impl Default for ToggleThresholds {
    fn default() -> Self {
        // Half travel on an 8-bit axis; firm enough that resting weight on
        // a pedal does not flip features.
        Self {
            speech_to_text: 64,
            text_to_speech: 64,
        }
    }
}

/// Per-tick configuration snapshot read from the [`ConfigSource`] port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlConfig {
    pub calibration: CalibrationConfig,
    pub thresholds: ToggleThresholds,
}

/// In-memory [`ConfigSource`] for hosts that push configuration updates.
///
/// The host replaces the snapshot between ticks; the loop re-reads it on
/// every processed sample.
#[derive(Debug, Default)]
pub struct StaticConfigSource {
    inner: RwLock<ControlConfig>,
}

impl StaticConfigSource {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    /// Replace the whole snapshot.
    pub fn set(&self, config: ControlConfig) {
        *self.inner.write() = config;
    }

    /// Replace just the calibration.
    pub fn set_calibration(&self, calibration: CalibrationConfig) {
        self.inner.write().calibration = calibration;
    }

    /// Replace just the thresholds.
    pub fn set_thresholds(&self, thresholds: ToggleThresholds) {
        self.inner.write().thresholds = thresholds;
    }

    pub fn get(&self) -> ControlConfig {
        *self.inner.read()
    }
}

impl ConfigSource for StaticConfigSource {
    fn control_config(&self) -> anyhow::Result<ControlConfig> {
        Ok(self.get())
    }
}
