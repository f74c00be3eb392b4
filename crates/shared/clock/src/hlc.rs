use causal_core::HlcTimestamp;
use causal_ports::{Clock, ClockError, ClockResult};
use log::{debug, trace, warn};
use parking_lot::RwLock;
use std::fmt;

use crate::{HlcConfig, SystemClock};

/// Hybrid logical clock
///
/// Pairs a physical timestamp (nanoseconds since the Unix epoch, read from
/// a [`Clock`] source) with a logical tiebreaker. The physical part tracks
/// real time and self-corrects when a peer lags behind, while the
/// `(physical, logical)` pair strictly increases on every update from a
/// peer that is at or ahead of local real time.
///
/// The state sits behind one reader-writer lock: `increase` and `update`
/// take the write path, `time` the read path.
pub struct HybridLogicalClock<C: Clock = SystemClock> {
    state: RwLock<HlcTimestamp>,
    source: C,
    config: HlcConfig,
}

impl HybridLogicalClock<SystemClock> {
    /// Create a clock at the current system time with logical time zero
    pub fn new() -> Self {
        Self::with_source(SystemClock::new())
    }

    /// Create a clock seeded with explicit prior state
    pub fn new_from(physical_time: i64, logical_time: u64) -> Self {
        Self::from_parts(SystemClock::new(), physical_time, logical_time)
    }
}

impl Default for HybridLogicalClock<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> HybridLogicalClock<C> {
    /// Create a clock reading real time from `source`, logical time zero
    pub fn with_source(source: C) -> Self {
        let physical_time = source.now_nanos();
        Self::from_parts(source, physical_time, 0)
    }

    /// Create a clock on `source` seeded with explicit prior state
    pub fn from_parts(source: C, physical_time: i64, logical_time: u64) -> Self {
        Self {
            state: RwLock::new(HlcTimestamp::new(physical_time, logical_time)),
            source,
            config: HlcConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: HlcConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &HlcConfig {
        &self.config
    }

    /// Get the physical time source
    pub fn source(&self) -> &C {
        &self.source
    }

    /// Record a local event
    ///
    /// Physical time is refreshed from the source (not advanced from the
    /// stored value) and the logical counter always moves up by one. If the
    /// source steps backwards, so does the stored physical time.
    pub fn increase(&self) {
        let mut state = self.state.write();
        let now = self.source.now_nanos();
        *state = HlcTimestamp::new(now, state.logical() + 1);
    }

    /// Merge a stamp received from a peer
    ///
    /// - remote behind local real time: adopt `now`, reset logical to zero
    /// - otherwise: adopt the remote physical time, and move logical past
    ///   the larger of the two logical values
    pub fn update(&self, remote_physical: i64, remote_logical: u64) {
        let mut state = self.state.write();
        let now = self.source.now_nanos();
        *state = self.merge_remote(*state, now, remote_physical, remote_logical);
    }

    /// [`update`](Self::update) taking an [`HlcTimestamp`]
    pub fn update_timestamp(&self, remote: HlcTimestamp) {
        self.update(remote.physical(), remote.logical());
    }

    /// [`update`](Self::update) guarded by the configured drift limit
    ///
    /// Rejects a stamp whose physical time leads local real time by more
    /// than `max_drift_ms`, leaving the clock unchanged. Without a limit
    /// this behaves exactly like `update`.
    pub fn try_update(&self, remote_physical: i64, remote_logical: u64) -> ClockResult<()> {
        let mut state = self.state.write();
        let now = self.source.now_nanos();

        if let Some(max_drift) = self.config.max_drift_nanos() {
            if remote_physical.saturating_sub(now) > max_drift {
                warn!(
                    "[{}] Rejecting remote stamp {}.{}: leads local time {} by more than {}ns",
                    self.source.name(),
                    remote_physical,
                    remote_logical,
                    now,
                    max_drift
                );
                return Err(ClockError::DriftExceeded {
                    remote: remote_physical,
                    now,
                    max_drift,
                });
            }
        }

        *state = self.merge_remote(*state, now, remote_physical, remote_logical);
        Ok(())
    }

    /// Current `(physical, logical)` pair
    pub fn time(&self) -> (i64, u64) {
        self.state.read().into_parts()
    }

    /// Current reading as an [`HlcTimestamp`]
    pub fn timestamp(&self) -> HlcTimestamp {
        *self.state.read()
    }

    fn merge_remote(
        &self,
        local: HlcTimestamp,
        now: i64,
        remote_physical: i64,
        remote_logical: u64,
    ) -> HlcTimestamp {
        if remote_physical < now {
            trace!(
                "[{}] Remote stamp {}.{} behind local time {}, resetting logical",
                self.source.name(),
                remote_physical,
                remote_logical,
                now
            );
            return HlcTimestamp::new(now, 0);
        }

        let logical = if remote_logical >= local.logical() {
            remote_logical + 1
        } else {
            local.logical() + 1
        };
        debug!(
            "[{}] Adopting remote physical time {} (local time {}), logical {}",
            self.source.name(),
            remote_physical,
            now,
            logical
        );
        HlcTimestamp::new(remote_physical, logical)
    }
}

impl<C: Clock> fmt::Debug for HybridLogicalClock<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HybridLogicalClock")
            .field("time", &*self.state.read())
            .field("source", &self.source.name())
            .finish()
    }
}
