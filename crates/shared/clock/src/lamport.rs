use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free Lamport scalar clock
///
/// A single monotonically non-decreasing counter. Any number of threads
/// may call [`increase`](Self::increase), [`update`](Self::update) and
/// [`time`](Self::time) through a shared reference; no increment is lost.
///
/// Counter overflow is not guarded against.
#[derive(Default)]
pub struct LamportClock {
    time: AtomicU64,
}

impl LamportClock {
    /// Create a clock starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock seeded with a previously observed value
    pub fn new_from(time: u64) -> Self {
        Self {
            time: AtomicU64::new(time),
        }
    }

    /// Advance the clock by one local event
    pub fn increase(&self) {
        self.time.fetch_add(1, Ordering::AcqRel);
    }

    /// Advance the clock by one local event and return the new value
    pub fn tick(&self) -> u64 {
        self.time.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Merge a value received from a peer: `time = max(time, other)`
    ///
    /// A failed compare-and-swap re-reads the counter and retries, so a
    /// concurrent `increase` can never be overwritten by stale data.
    pub fn update(&self, other: u64) {
        let mut current = self.time.load(Ordering::Acquire);
        while other > current {
            match self.time.compare_exchange_weak(
                current,
                other,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }

    /// Current logical time
    pub fn time(&self) -> u64 {
        self.time.load(Ordering::Acquire)
    }
}

impl fmt::Debug for LamportClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LamportClock({})", self.time())
    }
}
