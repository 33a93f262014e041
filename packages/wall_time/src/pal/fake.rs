//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation lets tests pin the wall clock to exact instants instead
/// of reading the real system clock. Multiple clones of the same
/// `FakePlatform` share the same underlying clock state, allowing tests to
/// move time after the platform has been handed to the entity under test.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FakePlatform {
    /// Creates a new fake platform with an arbitrary fixed starting instant.
    pub(crate) fn new() -> Self {
        let epoch = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("fixed calendar date is unambiguous in UTC");

        Self {
            now: Arc::new(Mutex::new(epoch)),
        }
    }

    /// Sets the current instant reported by the clock.
    ///
    /// This affects all clones of this platform. Time may be moved backwards,
    /// which tests use to record message log entries out of insertion order.
    pub(crate) fn set_now(&self, instant: DateTime<Utc>) {
        *self
            .now
            .lock()
            .expect("FakePlatform clock lock should not be poisoned") = instant;
    }

    /// Advances the clock by the given amount.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakePlatform clock lock should not be poisoned");
        *now += delta;
    }
}

impl Platform for FakePlatform {
    fn now_utc(&self) -> DateTime<Utc> {
        *self
            .now
            .lock()
            .expect("FakePlatform clock lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn reports_the_pinned_instant() {
        let platform = FakePlatform::new();

        let pinned = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).single().unwrap();
        platform.set_now(pinned);

        assert_eq!(platform.now_utc(), pinned);
    }

    #[test]
    fn advance_moves_the_clock_forward() {
        let platform = FakePlatform::new();
        let before = platform.now_utc();

        platform.advance(Duration::milliseconds(1500));

        assert_eq!(platform.now_utc(), before + Duration::milliseconds(1500));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(Duration::seconds(5));

        assert_eq!(platform1.now_utc(), platform2.now_utc());
    }
}
