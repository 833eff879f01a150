//! # graphscope Prelude
//!
//! Convenient re-exports of the types needed to load a graph and run either engine.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

// ================================================================================================
// Graph Store
// ================================================================================================

/// The graph store and its identifier and weight types
pub use crate::graph::{Distance, Edge, Graph, NodeId, Vertex, Weight};

/// Text loaders
pub use crate::graph::{parse_adjacency_list, parse_edge_list};

/// Adjacency traits the engines are written against
pub use crate::graph::{GraphBase, Predecessors, Successors, WeightedSuccessors};

// ================================================================================================
// Engines
// ================================================================================================

/// Priority frontier used by shortest-path search
pub use crate::frontier::Frontier;

/// Shortest paths and strongly connected components
pub use crate::algorithms::{
    shortest_paths, shortest_paths_scan, strongly_connected_components, Components, Kosaraju,
    ShortestPaths, UNREACHABLE,
};
