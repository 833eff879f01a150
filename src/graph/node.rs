//! Dense node identifiers.
//!
//! Input files name vertices with arbitrary integer labels (see [`Vertex`]). The graph
//! store maps every label to a [`NodeId`], a dense 0-based index assigned in
//! first-mention order, so that per-vertex traversal state can live in plain vectors.
//!
//! [`Vertex`]: crate::graph::Vertex

use std::fmt;

/// A strongly-typed dense index for a vertex inside a [`Graph`](crate::graph::Graph).
///
/// `NodeId` wraps a `usize`, preventing accidental mixing of internal indices with
/// the external [`Vertex`](crate::graph::Vertex) labels read from input. Ids are
/// handed out by [`Graph::add_vertex`](crate::graph::Graph::add_vertex) and by
/// [`Graph::add_edge`](crate::graph::Graph::add_edge) when an endpoint is seen for
/// the first time.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{Graph, NodeId};
///
/// let mut graph = Graph::new();
/// let first = graph.add_vertex(875_714);
/// let second = graph.add_vertex(3);
///
/// assert_eq!(first, NodeId::new(0));
/// assert_eq!(second, NodeId::new(1));
/// assert_eq!(graph.label(second), Some(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Primarily intended for tests; ids for real vertices come from the graph.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index, usable to index per-vertex vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_new() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);
    }

    #[test]
    fn test_node_id_ordering() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_hash() {
        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        set.insert(NodeId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 123usize.into();
        assert_eq!(node.index(), 123);

        let value: usize = NodeId::new(789).into();
        assert_eq!(value, 789);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(42);
        assert_eq!(format!("{node:?}"), "NodeId(42)");
        assert_eq!(format!("{node}"), "n42");
    }

    #[test]
    fn test_node_id_array_indexing() {
        let data = ["zero", "one", "two", "three"];
        assert_eq!(data[NodeId::new(2).index()], "two");
    }
}
