// Property-based tests for the countdown split
// Checks unit ranges and clamping with random target/now pairs

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use wedding_invitation::services::countdown::Countdown;

proptest! {
    /// Property: before the event every unit stays in range and the parts
    /// add back up to the remaining whole seconds
    #[test]
    fn prop_units_in_range_before_target(remaining_ms in 1i64..=400 * 86_400_000i64) {
        let target = Utc.with_ymd_and_hms(2026, 7, 31, 16, 0, 0).unwrap();
        let now = target - Duration::milliseconds(remaining_ms);

        let countdown = Countdown::until(&target, &now);
        let total_seconds = remaining_ms / 1000;

        prop_assert!(countdown.hours >= 0 && countdown.hours < 24);
        prop_assert!(countdown.minutes >= 0 && countdown.minutes < 60);
        prop_assert!(countdown.seconds >= 0 && countdown.seconds < 60);
        prop_assert_eq!(countdown.days, (total_seconds / 3600) / 24);
        prop_assert_eq!(countdown.total_seconds(), total_seconds);
    }

    /// Property: at or after the event nothing is negative; all zeros
    #[test]
    fn prop_never_negative_after_target(elapsed_secs in 0i64..=10 * 365 * 86_400i64) {
        let target = Utc.with_ymd_and_hms(2026, 7, 31, 16, 0, 0).unwrap();
        let now = target + Duration::seconds(elapsed_secs);

        let countdown = Countdown::until(&target, &now);
        prop_assert_eq!(countdown, Countdown::default());
        prop_assert!(countdown.is_finished());
    }

    /// Property: a raw second count always splits into non-negative parts
    #[test]
    fn prop_from_seconds_non_negative(total in any::<i32>()) {
        let countdown = Countdown::from_seconds(total as i64);
        prop_assert!(countdown.days >= 0);
        prop_assert!(countdown.hours >= 0);
        prop_assert!(countdown.minutes >= 0);
        prop_assert!(countdown.seconds >= 0);
        prop_assert_eq!(countdown.total_seconds(), (total as i64).max(0));
    }
}
