use causal_core::Timestamp;
use causal_ports::Clock;
use chrono::Utc;

/// Real system clock for production use
///
/// Returns the current wall-clock time. This is the default physical
/// source of [`HybridLogicalClock`](crate::HybridLogicalClock). It is not
/// monotonic: an NTP step can move it backwards.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
