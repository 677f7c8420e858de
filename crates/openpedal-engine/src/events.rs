//! Control loop event stream

use openpedal_calibration::ControlState;

/// Which feature a toggle crossing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTarget {
    SpeechToText,
    TextToSpeech,
}

/// Notifications pushed to the host, in sample-arrival order.
///
/// Delivered over an unbounded channel so the consumer can never stall
/// sample ingestion, and can never re-enter it either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The derived control state changed (a normalized sample arrived).
    StateChanged(ControlState),
    /// A toggle crossing fired; `enabled` is the collaborator's new state.
    ToggleFired { target: ToggleTarget, enabled: bool },
    /// The fine-grained accept fallback engaged for the session.
    FallbackEngaged,
    /// The sample source reported a connection loss.
    Disconnected,
}
