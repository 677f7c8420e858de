//! Control loop orchestrator

use std::sync::Arc;

use hid_footpedal_protocol::{AxisNormalizer, DeviceProfile};
use openpedal_calibration::control_state_for;
use openpedal_rate::RepeatController;
use openpedal_toggle::ThresholdToggle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ControlConfig;
use crate::events::{ControlEvent, ToggleTarget};
use crate::ports::{ActionInvoker, ConfigSource, FeatureToggle};

/// Push events from the sample source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleEvent {
    /// A raw HID input report.
    Report(Vec<u8>),
    /// The sample source lost the device.
    Disconnected,
}

/// The pedal-input control loop.
///
/// On every normalized sample: derive the control state from the primary
/// axis and apply it to the repeat controller, then run the two toggle
/// detectors against the auxiliary axes. The ordering is fixed and both
/// steps see the same snapshot, so behavior stays consistent under rapid
/// sample arrival. Each sample is processed to completion before the next
/// is taken.
pub struct ControlLoop {
    normalizer: AxisNormalizer,
    max_axis_value: u8,
    repeat: RepeatController,
    speech_to_text: Arc<dyn FeatureToggle>,
    text_to_speech: Arc<dyn FeatureToggle>,
    config_source: Arc<dyn ConfigSource>,
    last_config: ControlConfig,
    stt_detector: ThresholdToggle,
    tts_detector: ThresholdToggle,
    events: mpsc::UnboundedSender<ControlEvent>,
}

impl ControlLoop {
    /// Assemble a loop for one device session.
    ///
    /// Fine-grained accept capability is negotiated here, once, via the
    /// invoker. Returns the loop plus the receiving end of its event
    /// stream; events arrive in sample order.
    pub fn new(
        profile: DeviceProfile,
        invoker: Arc<dyn ActionInvoker>,
        speech_to_text: Arc<dyn FeatureToggle>,
        text_to_speech: Arc<dyn FeatureToggle>,
        config_source: Arc<dyn ConfigSource>,
    ) -> (Self, mpsc::UnboundedReceiver<ControlEvent>) {
        let initial = match config_source.control_config() {
            Ok(config) => config,
            Err(error) => {
                warn!(error = %error, "initial config read failed; starting from defaults");
                ControlConfig::default()
            }
        };

        let (events, event_rx) = mpsc::unbounded_channel();
        let control_loop = Self {
            normalizer: AxisNormalizer::new(profile),
            max_axis_value: profile.max_axis_value,
            repeat: RepeatController::new(invoker),
            speech_to_text,
            text_to_speech,
            config_source,
            last_config: initial,
            stt_detector: ThresholdToggle::new(initial.thresholds.speech_to_text),
            tts_detector: ThresholdToggle::new(initial.thresholds.text_to_speech),
            events,
        };
        (control_loop, event_rx)
    }

    /// Drive the loop from a sample source until it closes, then shut down.
    pub async fn run(mut self, mut samples: mpsc::UnboundedReceiver<SampleEvent>) {
        info!(max_axis_value = self.max_axis_value, "pedal control loop running");
        while let Some(event) = samples.recv().await {
            match event {
                SampleEvent::Report(data) => self.process_sample(&data),
                SampleEvent::Disconnected => self.handle_disconnected(),
            }
        }
        self.shutdown();
    }

    /// Process one raw input report to completion.
    ///
    /// A report that normalizes to the previous snapshot is a no-op: no
    /// config read, no state derivation, no events.
    pub fn process_sample(&mut self, data: &[u8]) {
        let Some(state) = self.normalizer.ingest(data) else {
            return;
        };

        let config = self.refresh_config();

        let control = control_state_for(state.primary, &config.calibration, self.max_axis_value);
        debug!(
            primary = state.primary,
            direction = ?control.direction,
            intensity = control.intensity,
            "derived control state"
        );
        self.repeat.apply(control);
        self.emit(ControlEvent::StateChanged(control));
        if self.repeat.fallback_just_engaged() {
            self.emit(ControlEvent::FallbackEngaged);
        }

        self.stt_detector
            .set_threshold(config.thresholds.speech_to_text);
        if self.stt_detector.update(state.secondary) {
            self.fire_toggle(ToggleTarget::SpeechToText);
        }

        self.tts_detector
            .set_threshold(config.thresholds.text_to_speech);
        if self.tts_detector.update(state.tertiary) {
            self.fire_toggle(ToggleTarget::TextToSpeech);
        }
    }

    /// React to a connection loss: stop the streams and re-arm the
    /// normalizer and detectors so the first post-reconnect report always
    /// emits and never fires a surprise toggle.
    pub fn handle_disconnected(&mut self) {
        warn!("pedal connection lost; stopping repeat streams");
        self.repeat.cancel();
        self.normalizer.reset();
        self.stt_detector.reset();
        self.tts_detector.reset();
        self.emit(ControlEvent::Disconnected);
    }

    /// Cancel all timers. No queued action fires after this returns.
    pub fn shutdown(&mut self) {
        self.repeat.cancel();
        info!("pedal control loop stopped");
    }

    /// Whether the session still accepts at fine granularity.
    pub fn fine_grained_available(&self) -> bool {
        self.repeat.fine_grained_available()
    }

    fn refresh_config(&mut self) -> ControlConfig {
        match self.config_source.control_config() {
            Ok(config) => {
                if config != self.last_config
                    && config.calibration.validate(self.max_axis_value).is_err()
                {
                    warn!(
                        center = config.calibration.center,
                        deadzone = config.calibration.deadzone,
                        "calibration out of range; clamping"
                    );
                }
                self.last_config = config;
                config
            }
            Err(error) => {
                warn!(error = %error, "config read failed; using last known good");
                self.last_config
            }
        }
    }

    fn fire_toggle(&self, target: ToggleTarget) {
        let port = match target {
            ToggleTarget::SpeechToText => &self.speech_to_text,
            ToggleTarget::TextToSpeech => &self.text_to_speech,
        };
        match port.toggle() {
            Ok(enabled) => {
                info!(?target, enabled, "feature toggled");
                self.emit(ControlEvent::ToggleFired { target, enabled });
            }
            Err(error) => {
                warn!(?target, error = %error, "feature toggle failed; state assumed unchanged");
            }
        }
    }

    fn emit(&self, event: ControlEvent) {
        if self.events.send(event).is_err() {
            // Events are best-effort; a host without a receiver still
            // gets the side effects.
            debug!("event receiver dropped");
        }
    }
}

impl Drop for ControlLoop {
    fn drop(&mut self) {
        self.repeat.cancel();
    }
}
