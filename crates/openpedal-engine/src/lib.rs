//! OpenPedal control loop engine
//!
//! Composes the leaf crates into the pedal-input control loop: raw HID
//! samples are normalized, the primary axis maps through calibration into
//! a directional intensity that drives the repeat streams, and the two
//! auxiliary axes fire edge-triggered feature toggles. Everything outside
//! this loop — device I/O, the editor, speech backends, configuration
//! storage — sits behind the port traits in [`ports`].

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod engine;
pub mod events;
pub mod ports;

pub use config::{ControlConfig, StaticConfigSource, ToggleThresholds};
pub use engine::{ControlLoop, SampleEvent};
pub use events::{ControlEvent, ToggleTarget};
pub use ports::{ActionInvoker, ConfigSource, FeatureToggle};

// Re-export the leaf types hosts need to assemble a loop.
pub use hid_footpedal_protocol::{AxisNormalizer, DeviceProfile, PedalState};
pub use openpedal_calibration::{CalibrationConfig, ControlState, PedalDirection};
pub use openpedal_rate::RepeatController;
pub use openpedal_toggle::ThresholdToggle;
