//! Single-source shortest paths (Dijkstra).
//!
//! [`shortest_paths`] drives a [`Frontier`] over the weighted forward adjacency of a
//! [`Graph`] and settles vertices in order of increasing distance. Every vertex ends up
//! with either its exact distance from the source or [`UNREACHABLE`].
//!
//! # Preconditions
//!
//! Edge weights must be non-negative. [`Weight`](crate::graph::Weight) is unsigned, so a
//! negative length cannot reach the engine in the first place.
//!
//! # Complexity
//!
//! - [`shortest_paths`]: O((V + E) log V) through the heap-backed frontier
//! - [`shortest_paths_scan`]: O(V² + E), picking the minimum by linear scan; only
//!   worthwhile for small dense graphs

use std::collections::BTreeMap;

use crate::{
    frontier::Frontier,
    graph::{Distance, Graph, NodeId, Vertex, WeightedSuccessors},
    Error, Result,
};

/// Distance recorded for vertices with no path from the source.
///
/// Relaxation saturates instead of wrapping, so no real path length can collide with it.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Shortest distances from one source to every vertex of a graph.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: Vertex,
    distances: Vec<Distance>,
}

impl<'g> ShortestPaths<'g> {
    /// Returns the source vertex of this run.
    #[must_use]
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Returns the distance from the source to `vertex`.
    ///
    /// `None` if the vertex is not part of the graph, `Some(UNREACHABLE)` if it is but
    /// cannot be reached.
    #[must_use]
    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        self.graph
            .node_id(vertex)
            .map(|node| self.distances[node.index()])
    }

    /// Returns the distance recorded for a node id.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn distance_of(&self, node: NodeId) -> Distance {
        self.distances[node.index()]
    }

    /// Returns `true` if a path from the source to `vertex` exists.
    #[must_use]
    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex)
            .is_some_and(|distance| distance != UNREACHABLE)
    }

    /// Returns the number of vertices reachable from the source, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&distance| distance != UNREACHABLE)
            .count()
    }

    /// Returns an iterator over `(vertex, distance)` pairs in first-mention order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Distance)> + '_ {
        self.graph.vertices().zip(self.distances.iter().copied())
    }

    /// Converts the result into an ordered map from vertex to distance.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<Vertex, Distance> {
        self.graph.vertices().zip(self.distances).collect()
    }
}

/// Computes shortest distances from `source` to every vertex of `graph`.
///
/// # Errors
///
/// Returns [`Error::UnknownSource`] if `source` is not a vertex of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::{shortest_paths, UNREACHABLE}, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 7);
/// graph.add_edge(1, 3, 9);
/// graph.add_edge(2, 3, 1);
/// graph.add_vertex(4);
///
/// let paths = shortest_paths(&graph, 1)?;
/// assert_eq!(paths.distance(1), Some(0));
/// assert_eq!(paths.distance(3), Some(8));
/// assert_eq!(paths.distance(4), Some(UNREACHABLE));
/// assert_eq!(paths.distance(5), None);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn shortest_paths(graph: &Graph, source: Vertex) -> Result<ShortestPaths<'_>> {
    let start = graph.node_id(source).ok_or(Error::UnknownSource(source))?;
    let distances = heap_distances(graph, start)?;

    Ok(ShortestPaths {
        graph,
        source,
        distances,
    })
}

/// Computes the same result as [`shortest_paths`] by scanning for the closest
/// unexplored vertex instead of keeping a frontier.
///
/// # Errors
///
/// Returns [`Error::UnknownSource`] if `source` is not a vertex of `graph`.
pub fn shortest_paths_scan(graph: &Graph, source: Vertex) -> Result<ShortestPaths<'_>> {
    let start = graph.node_id(source).ok_or(Error::UnknownSource(source))?;
    let distances = scan_distances(graph, start);

    Ok(ShortestPaths {
        graph,
        source,
        distances,
    })
}

fn heap_distances<G: WeightedSuccessors>(graph: &G, source: NodeId) -> Result<Vec<Distance>> {
    let node_count = graph.node_count();
    let mut distance = vec![UNREACHABLE; node_count];
    let mut explored = vec![false; node_count];
    let mut frontier = Frontier::new(node_count);
    let mut settled = 0usize;

    distance[source.index()] = 0;
    frontier.insert(source, 0);

    while !frontier.is_empty() {
        let (node, queued) = frontier.extract_min()?;
        // The frontier never hands out a node twice once it has left it
        debug_assert!(!explored[node.index()]);
        debug_assert_eq!(queued, distance[node.index()]);

        explored[node.index()] = true;
        settled += 1;

        let base = distance[node.index()];
        for edge in graph.out_edges(node) {
            let target = edge.target.index();
            if explored[target] {
                continue;
            }

            let candidate = base.saturating_add(Distance::from(edge.weight));
            if candidate < distance[target] {
                distance[target] = candidate;
                frontier.decrease_key(edge.target, candidate);
            }
        }
    }

    log::debug!(
        "dijkstra from {}: settled {} of {} vertices, {} stale frontier entries",
        source,
        settled,
        node_count,
        frontier.discarded()
    );
    Ok(distance)
}

fn scan_distances<G: WeightedSuccessors>(graph: &G, source: NodeId) -> Vec<Distance> {
    let node_count = graph.node_count();
    let mut distance = vec![UNREACHABLE; node_count];
    let mut explored = vec![false; node_count];

    distance[source.index()] = 0;

    loop {
        let closest = (0..node_count)
            .filter(|&index| !explored[index] && distance[index] != UNREACHABLE)
            .min_by_key(|&index| (distance[index], index));
        let Some(index) = closest else {
            break;
        };

        explored[index] = true;
        for edge in graph.out_edges(NodeId::new(index)) {
            let target = edge.target.index();
            if explored[target] {
                continue;
            }

            let candidate = distance[index].saturating_add(Distance::from(edge.weight));
            if candidate < distance[target] {
                distance[target] = candidate;
            }
        }
    }

    distance
}
