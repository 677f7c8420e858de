//! Input report parsing and change-based axis normalization

use crate::{DeviceProfile, PedalState, ProtocolError, ProtocolResult};

impl PedalState {
    /// Parse an input report using the profile's axis offsets.
    ///
    /// Parsing is total: offsets past the end of a short report read as
    /// zero, and values above the profile maximum clamp to the maximum.
    pub fn parse(data: &[u8], profile: &DeviceProfile) -> Self {
        let axis = |index: usize| {
            let raw = profile
                .axis_offsets
                .get(index)
                .and_then(|&offset| data.get(offset))
                .copied()
                .unwrap_or(0);
            raw.min(profile.max_axis_value)
        };

        Self {
            primary: axis(0),
            secondary: axis(1),
            tertiary: axis(2),
        }
    }

    /// Parse an input report, rejecting reports that cannot carry all axes.
    ///
    /// Hosts use this on the diagnostics path; the control loop itself uses
    /// the total [`PedalState::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::ReportTooShort`] when `data` is shorter than
    /// the profile's report length.
    pub fn parse_strict(data: &[u8], profile: &DeviceProfile) -> ProtocolResult<Self> {
        let expected = profile.report_len();
        if data.len() < expected {
            return Err(ProtocolError::ReportTooShort {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::parse(data, profile))
    }
}

/// Converts raw reports into [`PedalState`] snapshots, emitting only on change.
///
/// Suppression is change-based, not periodic: a report that decodes to the
/// same three axis values as the previously emitted snapshot produces no
/// downstream work at all.
#[derive(Debug, Clone)]
pub struct AxisNormalizer {
    profile: DeviceProfile,
    last: Option<PedalState>,
}

impl AxisNormalizer {
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            profile,
            last: None,
        }
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Parse `data` and return the new snapshot, or `None` when it is
    /// bit-for-bit identical to the previously emitted snapshot.
    pub fn ingest(&mut self, data: &[u8]) -> Option<PedalState> {
        let state = PedalState::parse(data, &self.profile);
        if self.last == Some(state) {
            return None;
        }
        self.last = Some(state);
        Some(state)
    }

    /// Forget the previous snapshot so the next report always emits.
    ///
    /// Called on reconnection; the first report after a reset is never
    /// suppressed.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// The most recently emitted snapshot, if any.
    pub fn last_state(&self) -> Option<PedalState> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_axis_offsets() {
        let data = [0x01, 0x40, 0x20, 0x10];
        let state = PedalState::parse(&data, &DeviceProfile::eight_bit());

        assert_eq!(state.primary, 0x40);
        assert_eq!(state.secondary, 0x20);
        assert_eq!(state.tertiary, 0x10);
    }

    #[test]
    fn test_parse_short_report_zero_fills() {
        let data = [0x01, 0x40];
        let state = PedalState::parse(&data, &DeviceProfile::eight_bit());

        assert_eq!(state.primary, 0x40);
        assert_eq!(state.secondary, 0);
        assert_eq!(state.tertiary, 0);
    }

    #[test]
    fn test_parse_empty_report_is_all_zero() {
        let state = PedalState::parse(&[], &DeviceProfile::eight_bit());
        assert_eq!(state, PedalState::default());
    }

    #[test]
    fn test_parse_clamps_to_seven_bit_range() {
        let data = [0x01, 0xFF, 0x80, 0x7F];
        let state = PedalState::parse(&data, &DeviceProfile::seven_bit());

        assert_eq!(state.primary, 127);
        assert_eq!(state.secondary, 127);
        assert_eq!(state.tertiary, 127);
    }

    #[test]
    fn test_parse_strict_rejects_short_report() {
        let result = PedalState::parse_strict(&[0x01, 0x40], &DeviceProfile::eight_bit());
        assert!(matches!(
            result,
            Err(ProtocolError::ReportTooShort {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_parse_strict_accepts_exact_length() {
        let data = [0x01, 0x40, 0x20, 0x10];
        let state =
            PedalState::parse_strict(&data, &DeviceProfile::eight_bit()).expect("exact length");
        assert_eq!(state.primary, 0x40);
    }

    #[test]
    fn test_normalizer_emits_first_report() {
        let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());
        let state = normalizer.ingest(&[0x01, 0x40, 0x20, 0x10]);
        assert_eq!(state, Some(PedalState::new(0x40, 0x20, 0x10)));
    }

    #[test]
    fn test_normalizer_suppresses_identical_report() {
        let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());
        let data = [0x01, 0x40, 0x20, 0x10];

        assert!(normalizer.ingest(&data).is_some());
        assert!(normalizer.ingest(&data).is_none());
        assert!(normalizer.ingest(&data).is_none());
    }

    #[test]
    fn test_normalizer_suppresses_equivalent_bytes() {
        // Different raw bytes that decode to the same state are suppressed:
        // the report ID byte is not part of the snapshot.
        let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());

        assert!(normalizer.ingest(&[0x01, 0x40, 0x20, 0x10]).is_some());
        assert!(normalizer.ingest(&[0x02, 0x40, 0x20, 0x10]).is_none());
    }

    #[test]
    fn test_normalizer_emits_on_any_axis_change() {
        let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());

        assert!(normalizer.ingest(&[0x01, 0x40, 0x20, 0x10]).is_some());
        assert!(normalizer.ingest(&[0x01, 0x40, 0x21, 0x10]).is_some());
        assert!(normalizer.ingest(&[0x01, 0x40, 0x21, 0x11]).is_some());
    }

    #[test]
    fn test_normalizer_reset_rearms_emission() {
        let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());
        let data = [0x01, 0x40, 0x20, 0x10];

        assert!(normalizer.ingest(&data).is_some());
        assert!(normalizer.ingest(&data).is_none());

        normalizer.reset();
        assert!(normalizer.ingest(&data).is_some());
    }

    #[test]
    fn test_normalizer_last_state() {
        let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());
        assert_eq!(normalizer.last_state(), None);

        normalizer.ingest(&[0x01, 0x40, 0x20, 0x10]);
        assert_eq!(normalizer.last_state(), Some(PedalState::new(0x40, 0x20, 0x10)));
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_parse_is_total(data in proptest::collection::vec(any::<u8>(), 0..=64)) {
            let state = PedalState::parse(&data, &DeviceProfile::eight_bit());
            prop_assert_eq!(state.primary, data.get(1).copied().unwrap_or(0));
            prop_assert_eq!(state.secondary, data.get(2).copied().unwrap_or(0));
            prop_assert_eq!(state.tertiary, data.get(3).copied().unwrap_or(0));
        }

        #[test]
        fn prop_parse_respects_profile_max(
            data in proptest::collection::vec(any::<u8>(), 0..=64),
        ) {
            let state = PedalState::parse(&data, &DeviceProfile::seven_bit());
            prop_assert!(state.primary <= 127);
            prop_assert!(state.secondary <= 127);
            prop_assert!(state.tertiary <= 127);
        }

        #[test]
        fn prop_identical_reports_emit_once(
            data in proptest::collection::vec(any::<u8>(), 0..=16),
            repeats in 1usize..8,
        ) {
            let mut normalizer = AxisNormalizer::new(DeviceProfile::eight_bit());
            let mut emitted = 0;
            for _ in 0..repeats {
                if normalizer.ingest(&data).is_some() {
                    emitted += 1;
                }
            }
            prop_assert_eq!(emitted, 1);
        }

        #[test]
        fn prop_parse_strict_succeeds_for_sufficient_data(
            data in proptest::collection::vec(any::<u8>(), 4..=64),
        ) {
            prop_assert!(PedalState::parse_strict(&data, &DeviceProfile::eight_bit()).is_ok());
        }

        #[test]
        fn prop_parse_strict_fails_for_short_data(
            data in proptest::collection::vec(any::<u8>(), 0..4usize),
        ) {
            prop_assert!(PedalState::parse_strict(&data, &DeviceProfile::eight_bit()).is_err());
        }
    }
}
