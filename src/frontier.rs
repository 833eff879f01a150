//! Min-ordered priority frontier for shortest-path search.
//!
//! [`Frontier`] holds the vertices whose tentative distance is known but not yet final,
//! and hands them out smallest distance first.
//!
//! # Decrease-key
//!
//! [`std::collections::BinaryHeap`] has no decrease-key, so the frontier emulates it with
//! lazy deletion: lowering a member's key pushes a fresh heap entry and records the new
//! key in a per-node table. Older entries for the same node stay in the heap; when one
//! surfaces its distance no longer matches the recorded key and [`Frontier::extract_min`]
//! discards it. Membership and `len` are tracked through the key table, so stale entries
//! are never observable from the outside.
//!
//! # Ordering
//!
//! Entries are ordered by an explicit key, [`FrontierEntry`], rather than by the vertex
//! itself. Equal distances are broken by ascending [`NodeId`]; this is an artifact of the
//! backing structure, arbitrary but deterministic.
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{frontier::Frontier, graph::NodeId};
//!
//! let mut frontier = Frontier::new(3);
//! frontier.insert(NodeId::new(0), 40);
//! frontier.insert(NodeId::new(1), 25);
//! frontier.decrease_key(NodeId::new(0), 10);
//!
//! assert_eq!(frontier.len(), 2);
//! assert_eq!(frontier.extract_min()?, (NodeId::new(0), 10));
//! assert_eq!(frontier.extract_min()?, (NodeId::new(1), 25));
//! assert!(frontier.extract_min().is_err());
//! # Ok::<(), graphscope::Error>(())
//! ```

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    graph::{Distance, NodeId},
    Error, Result,
};

/// Heap entry: a node paired with the distance it was queued at.
///
/// The `Ord` implementation is reversed so that [`BinaryHeap`], a max-heap, yields the
/// smallest distance first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Tentative distance the node was queued with
    pub distance: Distance,
    /// The queued node
    pub node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Index-aware min-frontier over the nodes of one graph.
///
/// Sized for a fixed node count at construction; every method taking a [`NodeId`]
/// panics if the id is out of that range.
#[derive(Debug, Clone)]
pub struct Frontier {
    /// Live and stale entries
    heap: BinaryHeap<FrontierEntry>,
    /// Current key per node, `None` for non-members
    keys: Vec<Option<Distance>>,
    /// Number of members
    live: usize,
    /// Number of stale entries discarded so far
    discarded: usize,
}

impl Frontier {
    /// Creates an empty frontier for a graph with `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            keys: vec![None; node_count],
            live: 0,
            discarded: 0,
        }
    }

    /// Adds `node` with the given distance.
    ///
    /// Inserting a node that is already a member keeps the smaller of the two keys, the
    /// same as [`decrease_key`](Self::decrease_key). Returns `true` if the recorded key
    /// changed.
    pub fn insert(&mut self, node: NodeId, distance: Distance) -> bool {
        self.decrease_key(node, distance)
    }

    /// Lowers the key of `node` to `distance`, adding it if it is not a member.
    ///
    /// A key that is not smaller than the current one leaves the frontier untouched and
    /// returns `false`.
    pub fn decrease_key(&mut self, node: NodeId, distance: Distance) -> bool {
        let slot = &mut self.keys[node.index()];
        match *slot {
            Some(current) if distance >= current => return false,
            Some(_) => {}
            None => self.live += 1,
        }

        *slot = Some(distance);
        self.heap.push(FrontierEntry { distance, node });
        true
    }

    /// Removes and returns the member with the smallest distance.
    ///
    /// Stale entries left behind by [`decrease_key`](Self::decrease_key) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFrontier`] if the frontier has no members.
    pub fn extract_min(&mut self) -> Result<(NodeId, Distance)> {
        while let Some(entry) = self.heap.pop() {
            let slot = &mut self.keys[entry.node.index()];
            if *slot == Some(entry.distance) {
                *slot = None;
                self.live -= 1;
                return Ok((entry.node, entry.distance));
            }
            self.discarded += 1;
        }

        Err(Error::EmptyFrontier)
    }

    /// Returns the current key of `node`, or `None` if it is not a member.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<Distance> {
        self.keys[node.index()]
    }

    /// Returns `true` if `node` is a member.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.keys[node.index()].is_some()
    }

    /// Returns the number of members (stale heap entries are not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the frontier has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns how many stale entries have been discarded by `extract_min` so far.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_empty_frontier() {
        let mut frontier = Frontier::new(4);
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
        assert!(matches!(frontier.extract_min(), Err(Error::EmptyFrontier)));
    }

    #[test]
    fn test_extract_in_distance_order() {
        let mut frontier = Frontier::new(5);
        frontier.insert(n(0), 50);
        frontier.insert(n(1), 10);
        frontier.insert(n(2), 30);
        frontier.insert(n(3), 20);

        let order: Vec<(NodeId, Distance)> =
            std::iter::from_fn(|| frontier.extract_min().ok()).collect();
        assert_eq!(order, vec![(n(1), 10), (n(3), 20), (n(2), 30), (n(0), 50)]);
    }

    #[test]
    fn test_ties_break_by_node_id() {
        let mut frontier = Frontier::new(4);
        frontier.insert(n(3), 7);
        frontier.insert(n(1), 7);
        frontier.insert(n(2), 7);

        assert_eq!(frontier.extract_min().unwrap().0, n(1));
        assert_eq!(frontier.extract_min().unwrap().0, n(2));
        assert_eq!(frontier.extract_min().unwrap().0, n(3));
    }

    #[test]
    fn test_decrease_key_moves_member_forward() {
        let mut frontier = Frontier::new(3);
        frontier.insert(n(0), 100);
        frontier.insert(n(1), 50);

        assert!(frontier.decrease_key(n(0), 5));
        assert_eq!(frontier.key(n(0)), Some(5));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.extract_min().unwrap(), (n(0), 5));
        assert_eq!(frontier.extract_min().unwrap(), (n(1), 50));
    }

    #[test]
    fn test_repeated_decrease_key_discards_stale_entries() {
        let mut frontier = Frontier::new(2);
        frontier.insert(n(0), 90);
        frontier.decrease_key(n(0), 60);
        frontier.decrease_key(n(0), 30);
        frontier.decrease_key(n(0), 15);

        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.extract_min().unwrap(), (n(0), 15));
        assert!(frontier.is_empty());
        assert!(frontier.extract_min().is_err());
        assert_eq!(frontier.discarded(), 3);
    }

    #[test]
    fn test_decrease_key_ignores_larger_key() {
        let mut frontier = Frontier::new(2);
        frontier.insert(n(1), 20);

        assert!(!frontier.decrease_key(n(1), 20));
        assert!(!frontier.decrease_key(n(1), 25));
        assert_eq!(frontier.key(n(1)), Some(20));
    }

    #[test]
    fn test_insert_on_member_keeps_smaller_key() {
        let mut frontier = Frontier::new(2);
        frontier.insert(n(0), 8);
        assert!(!frontier.insert(n(0), 12));
        assert!(frontier.insert(n(0), 3));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.extract_min().unwrap(), (n(0), 3));
    }

    #[test]
    fn test_decrease_key_on_non_member_inserts() {
        let mut frontier = Frontier::new(2);
        assert!(frontier.decrease_key(n(1), 4));
        assert!(frontier.contains(n(1)));
        assert!(!frontier.contains(n(0)));
    }

    #[test]
    fn test_reinsert_after_extraction() {
        let mut frontier = Frontier::new(2);
        frontier.insert(n(0), 5);
        frontier.extract_min().unwrap();
        assert!(!frontier.contains(n(0)));

        frontier.insert(n(0), 9);
        assert_eq!(frontier.extract_min().unwrap(), (n(0), 9));
    }

    #[test]
    fn test_entry_ordering_is_reversed() {
        let near = FrontierEntry {
            distance: 1,
            node: n(5),
        };
        let far = FrontierEntry {
            distance: 2,
            node: n(0),
        };
        assert!(near > far);
    }
}
