use causal_core::Timestamp;
use causal_ports::Clock;
use chrono::{Duration, Utc};
use parking_lot::RwLock;

/// Frozen clock that only moves when told to
///
/// Time never advances on its own; use [`advance`](Self::advance) or
/// [`set_time`](Self::set_time). Gives hybrid logical clock tests a
/// deterministic notion of "now".
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
    name: String,
}

impl ManualClock {
    /// Create a manual clock frozen at the given time
    pub fn new(initial_time: Timestamp, name: impl Into<String>) -> Self {
        Self {
            current_time: RwLock::new(initial_time),
            name: name.into(),
        }
    }

    /// Create a manual clock frozen at the current wall time
    pub fn starting_now(name: impl Into<String>) -> Self {
        Self::new(Utc::now(), name)
    }

    /// Advance the frozen time by a duration (negative moves it back)
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current_time.write();
        *current += duration;
    }

    /// Explicitly set the frozen time
    ///
    /// Warning: this can move time backwards.
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
