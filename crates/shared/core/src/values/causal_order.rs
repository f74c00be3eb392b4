use serde::{Deserialize, Serialize};

/// Happened-before relationship between two vector clock readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CausalOrder {
    /// Every entry is less than or equal, at least one strictly less
    Before,
    /// Every entry is greater than or equal, at least one strictly greater
    After,
    /// All entries match
    Equal,
    /// Neither reading dominates the other
    Concurrent,
}

impl CausalOrder {
    /// Returns the relation seen from the other side
    pub fn reverse(&self) -> Self {
        match self {
            CausalOrder::Before => CausalOrder::After,
            CausalOrder::After => CausalOrder::Before,
            other => *other,
        }
    }

    /// True when the two readings are causally unrelated
    pub fn is_concurrent(&self) -> bool {
        matches!(self, CausalOrder::Concurrent)
    }
}
