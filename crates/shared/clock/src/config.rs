//! Hybrid logical clock configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`HybridLogicalClock`](crate::HybridLogicalClock)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlcConfig {
    /// How far (ms) a peer's physical time may lead local real time before
    /// `try_update` rejects it. `None` accepts any stamp.
    #[serde(default)]
    pub max_drift_ms: Option<u64>,
}

impl HlcConfig {
    /// Create a configuration with no drift limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted lead of a peer's physical time
    pub fn with_max_drift(mut self, max_drift: std::time::Duration) -> Self {
        self.max_drift_ms = Some(u64::try_from(max_drift.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Drift limit in nanoseconds, the unit of HLC physical time
    pub fn max_drift_nanos(&self) -> Option<i64> {
        self.max_drift_ms
            .map(|ms| i64::try_from(ms).unwrap_or(i64::MAX).saturating_mul(1_000_000))
    }
}
