//! Wall-clock source for seeding generators that were not given a seed.
//!
//! Injected rather than read globally so tests can pin the seed.

use chrono::{DateTime, Utc};

/// Abstraction over system time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch; negative before it.
    fn unix_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct At(DateTime<Utc>);

    impl Clock for At {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_unix_millis_counts_from_epoch() {
        let clock = At(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap());
        assert_eq!(clock.unix_millis(), 1_000);
    }

    #[test]
    fn test_unix_millis_is_negative_before_epoch() {
        let clock = At(Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap());
        assert_eq!(clock.unix_millis(), -1_000);
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.unix_millis() > 0);
    }
}
