//! Port traits for the host integration boundaries
//!
//! These traits separate the control loop from the collaborators it
//! drives. Implementations live in the host (editor extension, speech
//! backends, settings storage); the loop only ever sees the contracts
//! below. All ports are `Send + Sync` and must not block: a slow
//! collaborator degrades its own action, never sample processing.

use crate::config::ControlConfig;

pub use openpedal_rate::ActionInvoker;

/// A binary feature the auxiliary pedals flip (speech-to-text capture,
/// text-to-speech playback).
///
/// The loop holds no notion of the feature's current state; `toggle`
/// returns the new enabled state after flipping.
pub trait FeatureToggle: Send + Sync {
    /// Flip the feature.
    ///
    /// # Errors
    ///
    /// An error is reported and the feature state assumed unchanged; the
    /// loop keeps processing samples.
    fn toggle(&self) -> anyhow::Result<bool>;
}

/// Supplies the calibration and threshold snapshot.
///
/// Read once per processed sample so host-side edits take effect on the
/// next tick without restarting the loop.
pub trait ConfigSource: Send + Sync {
    /// Current configuration snapshot.
    ///
    /// # Errors
    ///
    /// A read failure is non-fatal: the loop falls back to the last
    /// snapshot it successfully read.
    fn control_config(&self) -> anyhow::Result<ControlConfig>;
}
