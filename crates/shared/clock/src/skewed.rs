use causal_core::Timestamp;
use causal_ports::Clock;
use chrono::Duration;
use std::sync::Arc;

/// Clock offset by a fixed drift from an underlying clock
///
/// In a real cluster, peers never agree exactly on the time because of:
/// - Clock synchronization errors
/// - Different time sources
/// - NTP corrections applied at different moments
///
/// This clock models one such peer so hybrid logical clock behavior can be
/// exercised against skewed real time.
pub struct SkewedClock {
    /// Reference clock all peers derive from
    base: Arc<dyn Clock>,
    /// Drift offset (positive = ahead, negative = behind)
    drift: Duration,
    /// Name/identifier for this peer clock
    name: String,
}

impl SkewedClock {
    /// Create a skewed clock
    ///
    /// # Arguments
    /// * `base` - Reference clock
    /// * `drift` - Offset from the reference (positive = ahead, negative = behind)
    /// * `name` - Identifier for this peer (e.g., "node-a")
    pub fn new(base: Arc<dyn Clock>, drift: Duration, name: impl Into<String>) -> Self {
        Self {
            base,
            drift,
            name: name.into(),
        }
    }

    /// Create a clock with zero drift
    pub fn synchronized(base: Arc<dyn Clock>, name: impl Into<String>) -> Self {
        Self::new(base, Duration::zero(), name)
    }

    /// Get the drift offset
    pub fn drift(&self) -> Duration {
        self.drift
    }

    /// Get reference to the underlying clock
    pub fn base_clock(&self) -> &Arc<dyn Clock> {
        &self.base
    }
}

impl Clock for SkewedClock {
    fn now(&self) -> Timestamp {
        self.base.now() + self.drift
    }

    fn name(&self) -> &str {
        &self.name
    }
}
