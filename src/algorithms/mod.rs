//! The two traversal engines.
//!
//! # Available Algorithms
//!
//! ## Shortest Paths
//!
//! - [`shortest_paths`] - Dijkstra over a heap-backed [`Frontier`](crate::frontier::Frontier)
//! - [`shortest_paths_scan`] - Dijkstra with a linear minimum scan
//! - [`ShortestPaths`] - Per-vertex distances, [`UNREACHABLE`] where no path exists
//!
//! ## Strongly Connected Components
//!
//! - [`strongly_connected_components`] - Kosaraju's two-pass algorithm
//! - [`Kosaraju`] - The per-run engine state behind it
//! - [`Components`] - Leaders, finish times and ranked component sizes
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Input |
//! |-----------|-----------------|-------|
//! | Dijkstra (heap) | O((V + E) log V) | Weighted adjacency list |
//! | Dijkstra (scan) | O(V² + E) | Small weighted graphs |
//! | Kosaraju | O(V + E) | Edge list, forward and reverse adjacency |
//!
//! Each call allocates its own traversal state. Running either engine twice on the same
//! graph yields identical results.

mod dijkstra;
mod kosaraju;

pub use dijkstra::{shortest_paths, shortest_paths_scan, ShortestPaths, UNREACHABLE};
pub use kosaraju::{strongly_connected_components, Components, Kosaraju};
