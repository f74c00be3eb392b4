use serde::{Deserialize, Serialize};
use std::fmt;

/// A hybrid logical clock reading
///
/// Pairs a physical component (nanoseconds since the Unix epoch) with a
/// logical tiebreaker. Ordering is lexicographic: physical first, then
/// logical. Field order matters for the derived `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HlcTimestamp {
    physical: i64,
    logical: u64,
}

impl HlcTimestamp {
    /// Create a timestamp from its physical and logical components
    pub const fn new(physical: i64, logical: u64) -> Self {
        Self { physical, logical }
    }

    /// Physical component in nanoseconds since the Unix epoch
    pub const fn physical(&self) -> i64 {
        self.physical
    }

    /// Logical tiebreaker
    pub const fn logical(&self) -> u64 {
        self.logical
    }

    /// Split into the `(physical, logical)` pair
    pub const fn into_parts(self) -> (i64, u64) {
        (self.physical, self.logical)
    }
}

impl From<(i64, u64)> for HlcTimestamp {
    fn from((physical, logical): (i64, u64)) -> Self {
        Self::new(physical, logical)
    }
}

impl From<HlcTimestamp> for (i64, u64) {
    fn from(ts: HlcTimestamp) -> Self {
        ts.into_parts()
    }
}

impl fmt::Display for HlcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.physical, self.logical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_dominates_ordering() {
        let earlier = HlcTimestamp::new(100, 50);
        let later = HlcTimestamp::new(101, 0);

        assert!(earlier < later);
    }

    #[test]
    fn test_logical_breaks_ties() {
        let a = HlcTimestamp::new(100, 1);
        let b = HlcTimestamp::new(100, 2);

        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_tuple_conversion() {
        let ts: HlcTimestamp = (42, 7).into();
        assert_eq!(ts.physical(), 42);
        assert_eq!(ts.logical(), 7);

        let (pt, lt): (i64, u64) = ts.into();
        assert_eq!((pt, lt), (42, 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(HlcTimestamp::new(1_700_000_000, 3).to_string(), "1700000000.3");
        assert_eq!(HlcTimestamp::new(-5, 0).to_string(), "-5.0");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&HlcTimestamp::new(10, 2)).unwrap();
        assert_eq!(json, r#"{"physical":10,"logical":2}"#);
    }
}
