use chrono::{DateTime, Utc};

mod causal_order;
mod hlc_timestamp;

pub use causal_order::CausalOrder;
pub use hlc_timestamp::HlcTimestamp;

/// Wall-clock timestamp in UTC, as produced by a physical time source
pub type Timestamp = DateTime<Utc>;

/// Identifier of an actor owning an entry in a vector clock
pub type NodeId = String;
