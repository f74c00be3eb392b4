//! Causal Ports
//!
//! Port definitions (traits) for the Causal workspace.
//! These define the boundary between the clock algebra and the
//! physical time sources it reads from.

mod clock;
mod error;

pub use clock::Clock;
pub use error::{ClockError, ClockResult};
