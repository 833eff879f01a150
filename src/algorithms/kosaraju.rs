//! Strongly Connected Components (SCC) using Kosaraju's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is a path
//! from every vertex to every other vertex in the set. Kosaraju's algorithm finds them
//! with two depth-first passes:
//!
//! 1. Over the **reverse** graph, visiting start vertices in `NodeId` order, assign every
//!    vertex a post-order finish time from one counter shared by all restarts.
//! 2. Clear the explored flags. Over the **forward** graph, visiting start vertices in
//!    descending finish time, give every vertex reached by a search the vertex that
//!    started it as its leader.
//!
//! Vertices sharing a leader are exactly the mutually reachable ones.
//!
//! # Stack Depth
//!
//! Real inputs contain paths hundreds of thousands of vertices long. Both passes keep
//! an explicit stack of adjacency iterators on the heap; the call stack depth is constant.
//!
//! # Complexity
//!
//! - Time: O(V + E)
//! - Space: O(V)

use std::cmp::Reverse;

use crate::graph::{Graph, GraphBase, NodeId, Predecessors, Successors, Vertex};

/// Per-run state of Kosaraju's algorithm.
///
/// Built fresh for every run and consumed by [`Kosaraju::run`], so state from one run
/// can never leak into another.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::Kosaraju, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 1);
/// graph.add_edge(2, 1, 1);
/// graph.add_edge(2, 3, 1);
///
/// let components = Kosaraju::new(&graph).run();
/// assert_eq!(components.sizes(), vec![2, 1]);
/// assert!(components.same_component(1, 2));
/// assert!(!components.same_component(2, 3));
/// ```
pub struct Kosaraju<'g, G = Graph> {
    graph: &'g G,
    /// Explored flag per node, cleared between the passes
    explored: Vec<bool>,
    /// Pass 1 finish time per node, 1-based
    finish_time: Vec<Option<usize>>,
    /// Nodes in increasing finish time
    finish_order: Vec<NodeId>,
    /// Pass 2 leader per node
    leader: Vec<Option<NodeId>>,
    /// Last finish time handed out
    clock: usize,
}

impl<'g, G> Kosaraju<'g, G>
where
    G: Successors + Predecessors,
{
    /// Allocates fresh traversal state for `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        let node_count = graph.node_count();
        Kosaraju {
            graph,
            explored: vec![false; node_count],
            finish_time: vec![None; node_count],
            finish_order: Vec::with_capacity(node_count),
            leader: vec![None; node_count],
            clock: 0,
        }
    }

    /// Runs both passes and groups the vertices by leader.
    #[must_use]
    pub fn run(mut self) -> Components<'g, G> {
        self.assign_finish_times();
        self.explored.fill(false);
        self.assign_leaders();

        Components::from_leaders(self.graph, self.leader, self.finish_time)
    }

    fn assign_finish_times(&mut self) {
        let graph = self.graph;
        for node in graph.node_ids() {
            if !self.explored[node.index()] {
                self.finish_from(node);
            }
        }

        log::debug!(
            "kosaraju pass 1: {} finish times over the reverse graph",
            self.clock
        );
    }

    /// Post-order search over the reverse graph starting at `start`.
    fn finish_from(&mut self, start: NodeId) {
        let graph = self.graph;

        self.explored[start.index()] = true;
        let mut stack = vec![(start, graph.predecessors(start))];

        while let Some((node, tails)) = stack.last_mut() {
            let node = *node;
            match tails.find(|tail| !self.explored[tail.index()]) {
                Some(tail) => {
                    self.explored[tail.index()] = true;
                    stack.push((tail, graph.predecessors(tail)));
                }
                None => {
                    stack.pop();
                    self.clock += 1;
                    self.finish_time[node.index()] = Some(self.clock);
                    self.finish_order.push(node);
                }
            }
        }
    }

    fn assign_leaders(&mut self) {
        let order = std::mem::take(&mut self.finish_order);
        let mut searches = 0usize;

        for &node in order.iter().rev() {
            if !self.explored[node.index()] {
                self.lead_from(node);
                searches += 1;
            }
        }

        log::debug!("kosaraju pass 2: {searches} leaders over the forward graph");
    }

    /// Search over the forward graph claiming every unexplored vertex for `leader`.
    fn lead_from(&mut self, leader: NodeId) {
        let graph = self.graph;

        self.explored[leader.index()] = true;
        self.leader[leader.index()] = Some(leader);
        let mut stack = vec![graph.successors(leader)];

        while let Some(heads) = stack.last_mut() {
            match heads.find(|head| !self.explored[head.index()]) {
                Some(head) => {
                    self.explored[head.index()] = true;
                    self.leader[head.index()] = Some(leader);
                    stack.push(graph.successors(head));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

/// The strongly connected components of a graph, ranked largest first.
///
/// Components are identified by their leader, the vertex that started the pass-2 search
/// which first reached them. Components of equal size are ranked by ascending leader
/// `NodeId`.
#[derive(Debug, Clone)]
pub struct Components<'g, G = Graph> {
    graph: &'g G,
    /// Leader per node
    leaders: Vec<Option<NodeId>>,
    /// Pass 1 finish time per node
    finish_times: Vec<Option<usize>>,
    /// `(leader, size)`, largest first
    ranked: Vec<(NodeId, usize)>,
}

impl<'g, G: GraphBase> Components<'g, G> {
    fn from_leaders(
        graph: &'g G,
        leaders: Vec<Option<NodeId>>,
        finish_times: Vec<Option<usize>>,
    ) -> Self {
        let mut tally = vec![0usize; leaders.len()];
        for leader in leaders.iter().flatten() {
            tally[leader.index()] += 1;
        }

        let mut ranked: Vec<(NodeId, usize)> = tally
            .into_iter()
            .enumerate()
            .filter(|&(_, size)| size > 0)
            .map(|(index, size)| (NodeId::new(index), size))
            .collect();
        ranked.sort_by_key(|&(leader, size)| (Reverse(size), leader));

        log::debug!(
            "kosaraju: {} components, largest {}",
            ranked.len(),
            ranked.first().map_or(0, |&(_, size)| size)
        );

        Components {
            graph,
            leaders,
            finish_times,
            ranked,
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ranked.len()
    }

    /// Returns the component sizes, largest first.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.ranked.iter().map(|&(_, size)| size).collect()
    }

    /// Returns the sizes of the `k` largest components, largest first.
    ///
    /// Fewer than `k` sizes are returned when the graph has fewer components.
    #[must_use]
    pub fn largest(&self, k: usize) -> Vec<usize> {
        self.ranked.iter().take(k).map(|&(_, size)| size).collect()
    }

    /// Returns an iterator over `(leader, size)` pairs, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.ranked.iter().copied()
    }

    /// Returns the leader of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn leader_of(&self, node: NodeId) -> Option<NodeId> {
        self.leaders[node.index()]
    }

    /// Returns the pass 1 finish time of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn finish_time_of(&self, node: NodeId) -> Option<usize> {
        self.finish_times[node.index()]
    }

    /// Returns the graph these components partition.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl Components<'_, Graph> {
    /// Returns the leader of `vertex`, or `None` if it is not part of the graph.
    #[must_use]
    pub fn leader(&self, vertex: Vertex) -> Option<Vertex> {
        let node = self.graph.node_id(vertex)?;
        self.leader_of(node).and_then(|leader| self.graph.label(leader))
    }

    /// Returns `true` if `a` and `b` are vertices of the same component.
    #[must_use]
    pub fn same_component(&self, a: Vertex, b: Vertex) -> bool {
        match (self.leader(a), self.leader(b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Returns the pass 1 finish time of `vertex`, or `None` if it is not part of the graph.
    #[must_use]
    pub fn finish_time(&self, vertex: Vertex) -> Option<usize> {
        let node = self.graph.node_id(vertex)?;
        self.finish_time_of(node)
    }

    /// Returns the vertices led by `leader`, in first-mention order.
    ///
    /// Empty if `leader` is not a vertex or leads no component.
    #[must_use]
    pub fn members(&self, leader: Vertex) -> Vec<Vertex> {
        let Some(leader) = self.graph.node_id(leader) else {
            return Vec::new();
        };

        self.graph
            .node_ids()
            .filter(|&node| self.leaders[node.index()] == Some(leader))
            .filter_map(|node| self.graph.label(node))
            .collect()
    }
}

/// Computes the strongly connected components of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::strongly_connected_components, Graph};
///
/// // Cycle 1 -> 2 -> 3 -> 1, plus a tail 3 -> 4
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 1);
/// graph.add_edge(2, 3, 1);
/// graph.add_edge(3, 1, 1);
/// graph.add_edge(3, 4, 1);
///
/// let components = strongly_connected_components(&graph);
/// assert_eq!(components.sizes(), vec![3, 1]);
/// ```
#[must_use]
pub fn strongly_connected_components(graph: &Graph) -> Components<'_> {
    Kosaraju::new(graph).run()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::graph::parse_edge_list;

    fn graph_of(edges: &[(Vertex, Vertex)]) -> Graph {
        let mut graph = Graph::new();
        for &(tail, head) in edges {
            graph.add_edge(tail, head, 1);
        }
        graph
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph = Graph::new();
        let components = strongly_connected_components(&graph);
        assert_eq!(components.count(), 0);
        assert!(components.sizes().is_empty());
    }

    #[test]
    fn test_scc_single_node() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        let components = strongly_connected_components(&graph);
        assert_eq!(components.sizes(), vec![1]);
        assert_eq!(components.leader(1), Some(1));
        assert_eq!(components.finish_time(1), Some(1));
    }

    #[test]
    fn test_scc_single_node_self_loop() {
        let graph = graph_of(&[(1, 1)]);
        let components = strongly_connected_components(&graph);
        assert_eq!(components.sizes(), vec![1]);
    }

    #[test]
    fn test_scc_linear_chain() {
        let graph = graph_of(&[(1, 2), (2, 3)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.sizes(), vec![1, 1, 1]);
        assert!(!components.same_component(1, 2));
        assert!(!components.same_component(2, 3));
    }

    #[test]
    fn test_scc_simple_cycle() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 1)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.sizes(), vec![3]);
        assert!(components.same_component(1, 3));
        let members: HashSet<Vertex> = components
            .members(components.leader(2).unwrap())
            .into_iter()
            .collect();
        assert_eq!(members, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_scc_connected_cycles() {
        // 1 <-> 2 -> 3 <-> 4
        let graph = graph_of(&[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.sizes(), vec![2, 2]);
        assert!(components.same_component(1, 2));
        assert!(components.same_component(3, 4));
        assert!(!components.same_component(2, 3));
    }

    #[test]
    fn test_scc_complex_structure() {
        //     +---+
        //     v   |
        // A-->B-->C
        // |   |
        // v   v
        // D<->E-->F
        //         |
        //         v
        //         G
        let graph = graph_of(&[
            (1, 2),
            (2, 3),
            (3, 2),
            (1, 4),
            (2, 5),
            (4, 5),
            (5, 4),
            (5, 6),
            (6, 7),
        ]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.sizes(), vec![2, 2, 1, 1, 1]);
        assert!(components.same_component(2, 3));
        assert!(components.same_component(4, 5));
        assert!(!components.same_component(3, 4));
    }

    #[test]
    fn test_finish_times_are_unique_and_dense() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 1), (3, 4), (5, 4)]);
        let components = strongly_connected_components(&graph);

        let mut times: Vec<usize> = graph
            .vertices()
            .filter_map(|vertex| components.finish_time(vertex))
            .collect();
        times.sort_unstable();
        assert_eq!(times, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_finish_times_are_post_order_on_reverse_graph() {
        // Reverse graph of 1 -> 2 -> 3 is 3 -> 2 -> 1; pass 1 starts at 1, which has
        // no reverse successors, then 2, then 3.
        let graph = graph_of(&[(1, 2), (2, 3)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.finish_time(1), Some(1));
        assert_eq!(components.finish_time(2), Some(2));
        assert_eq!(components.finish_time(3), Some(3));
        // 3 finishes last, so it leads first and reaches nothing new
        assert_eq!(components.leader(3), Some(3));
        assert_eq!(components.leader(1), Some(1));
    }

    #[test]
    fn test_leader_belongs_to_its_component() {
        let graph = graph_of(&[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3), (4, 5)]);
        let components = strongly_connected_components(&graph);

        for vertex in graph.vertices() {
            let leader = components.leader(vertex).unwrap();
            assert_eq!(components.leader(leader), Some(leader));
            assert!(components.same_component(vertex, leader));
        }
    }

    #[test]
    fn test_largest_truncates() {
        let graph = graph_of(&[(1, 2), (2, 1), (3, 4), (5, 5), (6, 7), (7, 8), (8, 6)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.largest(2), vec![3, 2]);
        assert_eq!(components.largest(10), vec![3, 2, 1, 1, 1]);
        assert_eq!(components.count(), 5);
    }

    #[test]
    fn test_unknown_vertex_queries() {
        let graph = graph_of(&[(1, 2)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components.leader(42), None);
        assert_eq!(components.finish_time(42), None);
        assert!(!components.same_component(1, 42));
        assert!(components.members(42).is_empty());
    }

    #[test]
    fn test_iter_matches_sizes() {
        let graph = parse_edge_list("1 2\n2 1\n3 3\n").unwrap();
        let components = strongly_connected_components(&graph);

        let sizes: Vec<usize> = components.iter().map(|(_, size)| size).collect();
        assert_eq!(sizes, components.sizes());
        let (leader, _) = components.iter().next().unwrap();
        assert_eq!(components.leader_of(leader), Some(leader));
    }

    #[test]
    fn test_deep_chain_does_not_exhaust_stack() {
        let n = 300_000u64;
        let mut graph = Graph::with_capacity(n as usize);
        for i in 0..n {
            graph.add_edge(i, i + 1, 1);
        }
        graph.add_edge(n, 0, 1);

        let components = strongly_connected_components(&graph);
        assert_eq!(components.sizes(), vec![n as usize + 1]);
    }

    #[test]
    fn test_independent_runs_agree() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 4)]);
        let first = strongly_connected_components(&graph);
        let second = Kosaraju::new(&graph).run();

        assert_eq!(first.sizes(), second.sizes());
        for vertex in graph.vertices() {
            assert_eq!(first.leader(vertex), second.leader(vertex));
        }
    }
}
