//! Trait definitions for graph abstractions.
//!
//! The traversal engines are written against these traits rather than against
//! [`Graph`](crate::graph::Graph) directly, so each engine states exactly which
//! adjacency direction it needs:
//!
//! - [`GraphBase`] - Core properties: node count and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`WeightedSuccessors`] - Forward traversal with edge lengths (shortest paths)
//! - [`Predecessors`] - Backward edge traversal (the reverse graph used by Kosaraju's first pass)
//!
//! All adjacency queries return iterators rather than collections, avoiding
//! allocations in the hot loops of the engines.

use crate::graph::{Edge, NodeId};

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph.
    ///
    /// Iteration order is ascending `NodeId`, i.e. first-mention order of the
    /// input, which keeps traversal order stable across runs.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the heads of the edges leaving `node`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose forward edges carry a length.
pub trait WeightedSuccessors: Successors {
    /// Returns an iterator over the edges leaving `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = Edge>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the tails of the edges entering `node`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
