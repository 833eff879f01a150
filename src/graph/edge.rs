//! Weighted adjacency entries.
//!
//! The graph store keeps one [`Edge`] per outgoing arc in the forward adjacency list of
//! its source. Reverse adjacency only needs the tail, so it stores plain
//! [`NodeId`](crate::graph::NodeId)s.

use std::fmt;

use crate::graph::NodeId;

/// Non-negative edge length. Negative lengths cannot be represented, which is exactly
/// the precondition shortest paths rely on.
pub type Weight = u32;

/// Accumulated path length. Wider than [`Weight`] so that long paths over heavy edges
/// do not wrap.
pub type Distance = u64;

/// An outgoing edge: the target node plus the edge length.
///
/// Edges loaded from an unweighted edge list carry a weight of 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Head of the edge
    pub target: NodeId,
    /// Length of the edge
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge pointing at `target` with the given `weight`.
    #[must_use]
    #[inline]
    pub const fn new(target: NodeId, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge(->{}, {})", self.target, self.weight)
    }
}
