//! Intensity to repeat-interval mapping

use std::time::Duration;

/// Repeat interval at the lowest usable intensity.
pub const BASE_INTERVAL_MS: u64 = 600;

/// Floor for the repeat interval; caps the action rate at full travel.
pub const MIN_INTERVAL_MS: u64 = 60;

/// Map a 0-100 intensity to the interval between repeated actions.
///
/// Linear from [`BASE_INTERVAL_MS`] at intensity 0 down to the
/// [`MIN_INTERVAL_MS`] floor at intensity 100, so higher intensity always
/// yields an equal or smaller interval. Intensities above 100 clamp.
pub fn repeat_interval(intensity: u8) -> Duration {
    let intensity = u64::from(intensity.min(100));
    let span = BASE_INTERVAL_MS - MIN_INTERVAL_MS;
    let ms = BASE_INTERVAL_MS - span * intensity / 100;
    Duration::from_millis(ms.max(MIN_INTERVAL_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_endpoints() {
        assert_eq!(repeat_interval(0), Duration::from_millis(BASE_INTERVAL_MS));
        assert_eq!(repeat_interval(100), Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn test_interval_midpoint() {
        assert_eq!(repeat_interval(50), Duration::from_millis(330));
    }

    #[test]
    fn test_over_range_intensity_clamps_to_floor() {
        assert_eq!(repeat_interval(255), repeat_interval(100));
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_interval_monotonically_non_increasing(intensity in 0u8..100) {
            prop_assert!(repeat_interval(intensity) >= repeat_interval(intensity + 1));
        }

        #[test]
        fn prop_interval_within_bounds(intensity in any::<u8>()) {
            let interval = repeat_interval(intensity);
            prop_assert!(interval >= Duration::from_millis(MIN_INTERVAL_MS));
            prop_assert!(interval <= Duration::from_millis(BASE_INTERVAL_MS));
        }
    }
}
