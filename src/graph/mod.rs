//! Graph store for the traversal engines.
//!
//! This module holds the one graph representation both engines share: a directed graph
//! keyed by the integer vertex labels of the input, with a weighted forward adjacency and
//! an unweighted reverse adjacency built side by side at load time.
//!
//! # Key Components
//!
//! - [`Vertex`] - External integer label of a vertex, as found in the input
//! - [`NodeId`] - Dense internal index, assigned in first-mention order
//! - [`Edge`], [`Weight`], [`Distance`] - Weighted adjacency entries and path lengths
//! - [`Graph`] - The store itself
//! - [`parse_adjacency_list`], [`parse_edge_list`] - Text loaders for the two input formats
//! - Traits ([`GraphBase`], [`Successors`], [`WeightedSuccessors`], [`Predecessors`]) -
//!   the adjacency views the engines are written against
//!
//! # Design Principles
//!
//! ## Dense Indices
//!
//! Labels in real inputs are sparse and arbitrary, so every per-vertex annotation an
//! engine keeps (explored flags, distances, finish times, leaders) would otherwise need a
//! hash map. Mapping labels to [`NodeId`] once at load time turns all of those into
//! vectors, and fixes a stable enumeration order for free.
//!
//! ## Immutable After Construction
//!
//! The graph is built incrementally by the loader, then only borrowed by the engines.
//! Traversal state never lives in the graph.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphscope::graph::{Graph, Successors, Predecessors};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(1, 2, 4);
//! graph.add_edge(2, 3, 1);
//! graph.add_edge(3, 1, 2);
//!
//! let two = graph.node_id(2).unwrap();
//! let forward: Vec<_> = graph.successors(two).filter_map(|n| graph.label(n)).collect();
//! let reverse: Vec<_> = graph.predecessors(two).filter_map(|n| graph.label(n)).collect();
//!
//! assert_eq!(forward, vec![3]);
//! assert_eq!(reverse, vec![1]);
//! ```

mod edge;
mod loader;
mod node;
mod store;
mod traits;

pub use edge::{Distance, Edge, Weight};
pub use loader::{parse_adjacency_list, parse_edge_list};
pub use node::NodeId;
pub use store::Graph;
pub use traits::{GraphBase, Predecessors, Successors, WeightedSuccessors};

/// External vertex label, the integer naming a vertex in the input text.
pub type Vertex = u64;
