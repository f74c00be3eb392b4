//! Causal Core
//!
//! Plain value types shared by every clock in the Causal workspace.
//! This crate contains no locking, no I/O, and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::{CausalOrder, HlcTimestamp, NodeId, Timestamp};
