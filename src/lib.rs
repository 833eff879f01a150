// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
// - 'graph/loader.rs' uses mmap to map an input file into memory

//! # graphscope
//!
//! Shortest paths and strongly connected components over large sparse directed graphs.
//!
//! `graphscope` loads a graph from one of two plain-text formats into a single in-memory
//! store, then runs one of two traversal engines over it:
//!
//! - **Dijkstra** - single-source shortest paths driven by a min-ordered priority frontier
//!   with lazy decrease-key
//! - **Kosaraju** - strongly connected components from two depth-first passes, the first
//!   over the reverse graph, the second over the forward graph in reverse finish order
//!
//! Both engines are iterative. Kosaraju in particular never recurses, so graphs with
//! paths hundreds of thousands of vertices deep are handled on the default thread stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let graph = parse_edge_list("1 2\n2 3\n3 1\n3 4\n")?;
//! let components = strongly_connected_components(&graph);
//! assert_eq!(components.sizes(), vec![3, 1]);
//!
//! let graph = parse_adjacency_list("1\t2,7\t3,9\n2\t3,1\n")?;
//! let paths = shortest_paths(&graph, 1)?;
//! assert_eq!(paths.distance(3), Some(8));
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The graph store, its identifier types and the text loaders
//! - [`frontier`] - The priority frontier behind shortest-path search
//! - [`algorithms`] - The two engines and their result types
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Loading Files
//!
//! ```rust,no_run
//! use graphscope::{algorithms::strongly_connected_components, Graph};
//!
//! let graph = Graph::from_edge_list_file("SCC.txt")?;
//! let components = strongly_connected_components(&graph);
//! println!("five largest: {:?}", components.largest(5));
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Logging
//!
//! The library reports through the [`log`](https://docs.rs/log) facade: load summaries and
//! per-pass statistics at `debug`, suspicious but accepted input at `warn`. Install any
//! logger to see them.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 3);
/// let paths = shortest_paths(&graph, 1)?;
/// assert_eq!(paths.distance(2), Some(3));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

pub mod algorithms;
pub mod frontier;
pub mod graph;

pub use graph::Graph;

/// `graphscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// The main error type for all operations in this crate, covering malformed input, file
/// access, and precondition violations of the traversal engines.
pub use error::Error;
