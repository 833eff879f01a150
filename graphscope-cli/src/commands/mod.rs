pub mod common;
pub mod dijkstra;
pub mod scc;
