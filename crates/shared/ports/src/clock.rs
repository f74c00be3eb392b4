use causal_core::Timestamp;
use std::sync::Arc;

/// Port for physical time
///
/// The hybrid logical clock reads "real time" through this trait, which
/// allows different sources:
/// - Real system time for production
/// - Skewed time to model peers with drifting clocks
/// - Frozen, manually advanced time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }

    /// Current time as nanoseconds since the Unix epoch
    ///
    /// Saturates at `i64::MIN` / `i64::MAX` outside the range representable
    /// in nanoseconds (roughly years 1677 to 2262).
    fn now_nanos(&self) -> i64 {
        let now = self.now();
        now.timestamp_nanos_opt().unwrap_or(if now.timestamp() < 0 {
            i64::MIN
        } else {
            i64::MAX
        })
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn now_nanos(&self) -> i64 {
        (**self).now_nanos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct FixedClock(Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    #[test]
    fn test_now_nanos_in_range() {
        let clock = FixedClock(Utc.timestamp_opt(1, 500).unwrap());
        assert_eq!(clock.now_nanos(), 1_000_000_500);
        assert_eq!(clock.name(), "Clock");
    }

    #[test]
    fn test_now_nanos_saturates() {
        let far_future = FixedClock(Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(far_future.now_nanos(), i64::MAX);

        let far_past = FixedClock(Utc.with_ymd_and_hms(1500, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(far_past.now_nanos(), i64::MIN);
    }

    #[test]
    fn test_arc_delegates() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(Utc.timestamp_opt(2, 0).unwrap()));
        assert_eq!(clock.now_nanos(), 2_000_000_000);
    }
}
