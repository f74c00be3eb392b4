use causal_core::{CausalOrder, NodeId};
use log::trace;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::ptr;

/// Vector clock keyed by node identifier
///
/// Each entry is monotonically non-decreasing and absent nodes read as
/// zero. The whole map sits behind one reader-writer lock: writes
/// (`increase`, `update`, `merge`) serialize even on different nodes,
/// reads (`time`, `times`, `compare`) share.
#[derive(Default)]
pub struct VectorClock {
    clock: RwLock<HashMap<NodeId, u64>>,
}

impl VectorClock {
    /// Create an empty vector clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vector clock from previously observed entries
    ///
    /// The map is moved into the clock, so the caller cannot keep mutating
    /// it behind the clock's lock.
    pub fn new_from(clock: HashMap<NodeId, u64>) -> Self {
        Self {
            clock: RwLock::new(clock),
        }
    }

    /// Record one local event on `node`
    pub fn increase(&self, node: &str) {
        let mut clock = self.clock.write();
        match clock.get_mut(node) {
            Some(time) => *time += 1,
            None => {
                clock.insert(node.to_owned(), 1);
            }
        }
    }

    /// Merge another clock into this one (pointwise maximum)
    ///
    /// `other` is read through its own [`times`](Self::times) snapshot
    /// before this clock's write lock is taken, so the two locks are never
    /// held together.
    pub fn update(&self, other: &VectorClock) {
        if ptr::eq(self, other) {
            return;
        }
        self.merge(&other.times());
    }

    /// Merge a plain snapshot, e.g. one received from a peer
    pub fn merge(&self, times: &HashMap<NodeId, u64>) {
        let mut clock = self.clock.write();
        for (node, &time) in times {
            match clock.get_mut(node) {
                Some(current) => {
                    if time > *current {
                        *current = time;
                    }
                }
                None if time > 0 => {
                    trace!("vector clock learned node {} at {}", node, time);
                    clock.insert(node.clone(), time);
                }
                None => {}
            }
        }
    }

    /// Logical time of `node`, zero if never seen
    pub fn time(&self, node: &str) -> u64 {
        self.clock.read().get(node).copied().unwrap_or(0)
    }

    /// Point-in-time snapshot of every entry
    pub fn times(&self) -> HashMap<NodeId, u64> {
        self.clock.read().clone()
    }

    /// Happened-before relation between this clock and `other`
    pub fn compare(&self, other: &VectorClock) -> CausalOrder {
        if ptr::eq(self, other) {
            return CausalOrder::Equal;
        }
        let theirs = other.times();
        compare_maps(&self.clock.read(), &theirs)
    }
}

fn compare_maps(ours: &HashMap<NodeId, u64>, theirs: &HashMap<NodeId, u64>) -> CausalOrder {
    let mut less = false;
    let mut greater = false;

    for (node, &time) in ours {
        let other = theirs.get(node).copied().unwrap_or(0);
        if time < other {
            less = true;
        } else if time > other {
            greater = true;
        }
    }
    for (node, &other) in theirs {
        if !ours.contains_key(node) && other > 0 {
            less = true;
        }
    }

    match (less, greater) {
        (false, false) => CausalOrder::Equal,
        (true, false) => CausalOrder::Before,
        (false, true) => CausalOrder::After,
        (true, true) => CausalOrder::Concurrent,
    }
}

impl Clone for VectorClock {
    fn clone(&self) -> Self {
        Self::new_from(self.times())
    }
}

impl From<HashMap<NodeId, u64>> for VectorClock {
    fn from(clock: HashMap<NodeId, u64>) -> Self {
        Self::new_from(clock)
    }
}

impl fmt::Debug for VectorClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VectorClock").field(&*self.clock.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_of(entries: &[(&str, u64)]) -> VectorClock {
        VectorClock::new_from(
            entries
                .iter()
                .map(|(node, time)| (node.to_string(), *time))
                .collect(),
        )
    }

    #[test]
    fn test_new_is_empty() {
        assert!(VectorClock::new().times().is_empty());
    }

    #[test]
    fn test_new_from() {
        let vc = clock_of(&[("node1", 1), ("node2", 2)]);

        assert_eq!(vc.times().len(), 2);
        assert_eq!(vc.time("node1"), 1);
        assert_eq!(vc.time("node2"), 2);
    }

    #[test]
    fn test_increase() {
        let vc = VectorClock::new();
        vc.increase("node1");
        assert_eq!(vc.time("node1"), 1);
        vc.increase("node1");
        assert_eq!(vc.time("node1"), 2);
    }

    #[test]
    fn test_update_pointwise_max() {
        let vc1 = clock_of(&[("n1", 1), ("n2", 2)]);
        let vc2 = clock_of(&[("n1", 3), ("n2", 1), ("n3", 4)]);

        vc1.update(&vc2);

        assert_eq!(vc1.time("n1"), 3);
        assert_eq!(vc1.time("n2"), 2);
        assert_eq!(vc1.time("n3"), 4);
        assert_eq!(vc1.times().len(), 3);

        // The source clock is left untouched
        assert_eq!(vc2.time("n2"), 1);
    }

    #[test]
    fn test_update_with_self_is_noop() {
        let vc = clock_of(&[("n1", 5)]);
        vc.update(&vc);
        assert_eq!(vc.times(), HashMap::from([("n1".to_string(), 5)]));
    }

    #[test]
    fn test_merge_ignores_zero_entries() {
        let vc = VectorClock::new();
        vc.merge(&HashMap::from([("n1".to_string(), 0), ("n2".to_string(), 2)]));

        assert_eq!(vc.times(), HashMap::from([("n2".to_string(), 2)]));
    }

    #[test]
    fn test_time_of_unknown_node_is_zero() {
        let vc = clock_of(&[("node1", 1)]);
        assert_eq!(vc.time("node1"), 1);
        assert_eq!(vc.time("node2"), 0);
    }

    #[test]
    fn test_times_is_a_snapshot() {
        let vc = clock_of(&[("node1", 1), ("node2", 2)]);
        let snapshot = vc.times();

        vc.increase("node1");

        assert_eq!(snapshot["node1"], 1);
        assert_eq!(vc.time("node1"), 2);
    }

    #[test]
    fn test_compare() {
        let a = clock_of(&[("n1", 1), ("n2", 2)]);
        let b = clock_of(&[("n1", 2), ("n2", 2)]);
        let c = clock_of(&[("n1", 1), ("n2", 2), ("n3", 1)]);
        let d = clock_of(&[("n1", 3), ("n2", 0)]);

        assert_eq!(a.compare(&a), CausalOrder::Equal);
        assert_eq!(a.compare(&a.clone()), CausalOrder::Equal);
        assert_eq!(a.compare(&b), CausalOrder::Before);
        assert_eq!(b.compare(&a), CausalOrder::After);
        assert_eq!(a.compare(&c), CausalOrder::Before);
        assert_eq!(b.compare(&c), CausalOrder::Concurrent);
        assert_eq!(a.compare(&d), CausalOrder::Concurrent);
    }

    #[test]
    fn test_compare_treats_absent_as_zero() {
        let a = clock_of(&[("n1", 1), ("n2", 0)]);
        let b = clock_of(&[("n1", 1)]);

        assert_eq!(a.compare(&b), CausalOrder::Equal);
        assert_eq!(VectorClock::new().compare(&b), CausalOrder::Before);
    }

    #[test]
    fn test_update_makes_receiver_dominate() {
        let a = clock_of(&[("n1", 4), ("n2", 1)]);
        let b = clock_of(&[("n1", 1), ("n2", 3)]);
        assert!(a.compare(&b).is_concurrent());

        a.update(&b);
        assert_eq!(b.compare(&a), CausalOrder::Before);
    }
}
