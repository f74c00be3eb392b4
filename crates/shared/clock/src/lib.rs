//! Causal Clock
//!
//! Logical clocks for ordering events across processes whose wall clocks
//! disagree:
//!
//! - [`LamportClock`]: lock-free scalar counter (partial happened-before order)
//! - [`VectorClock`]: per-node counters (precise causality)
//! - [`HybridLogicalClock`]: physical time plus a logical tiebreaker
//!
//! The hybrid clock reads real time through the [`Clock`] port:
//!
//! ```text
//! SystemClock (wall clock, production default)
//! ManualClock (frozen, moved explicitly)
//!     │
//!     └── SkewedClock (drift: ±X ms from its base)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use causal_clock::{HybridLogicalClock, LamportClock, VectorClock};
//!
//! // Before emitting an event, advance locally and attach the reading
//! let hlc = HybridLogicalClock::new();
//! hlc.increase();
//! let (physical, logical) = hlc.time();
//!
//! // On receipt, merge the peer's reading before processing the event
//! hlc.update(remote_physical, remote_logical);
//!
//! let lamport = LamportClock::new();
//! lamport.update(remote_counter);
//!
//! let vector = VectorClock::new();
//! vector.increase("node-a");
//! vector.merge(&remote_vector);
//! ```

mod config;
mod hlc;
mod lamport;
mod manual;
mod skewed;
mod system;
mod vector;

pub use config::HlcConfig;
pub use hlc::HybridLogicalClock;
pub use lamport::LamportClock;
pub use manual::ManualClock;
pub use skewed::SkewedClock;
pub use system::SystemClock;
pub use vector::VectorClock;

// Re-export the port and value types for convenience
pub use causal_core::{CausalOrder, HlcTimestamp, NodeId, Timestamp};
pub use causal_ports::{Clock, ClockError, ClockResult};
