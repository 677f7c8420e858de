//! Edge-triggered crossing detection

/// Directionless edge trigger: true when `previous` and `current` sit on
/// opposite sides of `threshold` (values at or above the threshold count as
/// the high side).
pub fn crossed(previous: u8, current: u8, threshold: u8) -> bool {
    (previous < threshold && current >= threshold)
        || (previous >= threshold && current < threshold)
}

/// One watched axis: a threshold plus previous-value memory.
///
/// [`update`](Self::update) fires at most once per crossing regardless of
/// direction. The first sample after construction or [`reset`](Self::reset)
/// seeds the memory and never fires, so a pedal resting on the high side at
/// plug-in does not toggle anything.
#[derive(Debug, Clone)]
pub struct ThresholdToggle {
    threshold: u8,
    last: Option<u8>,
}

impl ThresholdToggle {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Replace the threshold, keeping the previous-value memory.
    ///
    /// Hosts re-read configuration between samples; a threshold change takes
    /// effect on the next update without re-arming the detector.
    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }

    /// Observe the next axis value; true exactly when it crossed the threshold.
    pub fn update(&mut self, current: u8) -> bool {
        let fired = match self.last {
            Some(previous) => crossed(previous, current, self.threshold),
            None => false,
        };
        self.last = Some(current);
        fired
    }

    /// Drop the previous-value memory; the next update seeds it silently.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
