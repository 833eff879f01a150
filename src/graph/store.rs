//! The graph store shared by both traversal engines.
//!
//! [`Graph`] combines the label-indexing of a keyed graph with dense adjacency lists:
//! every external [`Vertex`] label is mapped to a [`NodeId`] on first mention, the
//! forward adjacency keeps weighted [`Edge`]s and the reverse adjacency keeps the tails
//! of incoming edges. Both lists are filled by the same [`Graph::add_edge`] call, so the
//! reverse graph Kosaraju's first pass walks is always in sync with the forward graph.
//!
//! Construction is incremental; afterwards the topology is treated as immutable and the
//! engines only ever borrow `&Graph`.

use std::collections::HashMap;

use crate::{
    graph::{
        traits::{GraphBase, Predecessors, Successors, WeightedSuccessors},
        Edge, NodeId, Vertex, Weight,
    },
    Error, Result,
};

/// A directed, weighted graph keyed by integer vertex labels.
///
/// # Memory Layout
///
/// - `labels[i]` is the input label of `NodeId(i)`
/// - `outgoing[i]` lists the edges leaving `NodeId(i)` in insertion order
/// - `incoming[i]` lists the tails of the edges entering `NodeId(i)` in insertion order
///
/// Parallel edges and self loops are stored as given.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 10);
/// graph.add_edge(2, 3, 20);
/// graph.add_edge(1, 3, 30);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
///
/// let one = graph.node_id(1).unwrap();
/// assert_eq!(graph.out_degree(one), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Input label per node
    labels: Vec<Vertex>,
    /// Map from input label to `NodeId`
    index: HashMap<Vertex, NodeId>,
    /// Outgoing edges per node
    outgoing: Vec<Vec<Edge>>,
    /// Incoming edge tails per node
    incoming: Vec<Vec<NodeId>>,
    /// Total number of edges
    edge_count: usize,
}

impl Graph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with room for `vertices` vertices.
    ///
    /// Adjacency lists still grow per node as edges arrive.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            labels: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            outgoing: Vec::with_capacity(vertices),
            incoming: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Adds a vertex with the given label, or returns its existing `NodeId`.
    ///
    /// Idempotent: repeated calls with the same label always return the same id.
    pub fn add_vertex(&mut self, label: Vertex) -> NodeId {
        if let Some(&node) = self.index.get(&label) {
            return node;
        }

        let node = NodeId::new(self.labels.len());
        self.labels.push(label);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.index.insert(label, node);
        node
    }

    /// Adds a directed edge `source -> target`, inserting either endpoint on first mention.
    ///
    /// Returns the ids of both endpoints.
    pub fn add_edge(&mut self, source: Vertex, target: Vertex, weight: Weight) -> (NodeId, NodeId) {
        let source = self.add_vertex(source);
        let target = self.add_vertex(target);
        self.link(source, target, weight);
        (source, target)
    }

    /// Adds a directed edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either `source` or `target` node does not exist
    /// in the graph.
    pub fn add_edge_by_id(&mut self, source: NodeId, target: NodeId, weight: Weight) -> Result<()> {
        if source.index() >= self.labels.len() {
            return Err(Error::GraphError(format!(
                "source node {} does not exist in graph with {} nodes",
                source,
                self.labels.len()
            )));
        }
        if target.index() >= self.labels.len() {
            return Err(Error::GraphError(format!(
                "target node {} does not exist in graph with {} nodes",
                target,
                self.labels.len()
            )));
        }

        self.link(source, target, weight);
        Ok(())
    }

    fn link(&mut self, source: NodeId, target: NodeId, weight: Weight) {
        self.outgoing[source.index()].push(Edge::new(target, weight));
        self.incoming[target.index()].push(source);
        self.edge_count += 1;
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges, parallel edges and self loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the `NodeId` of a label, if the label is a vertex of this graph.
    #[must_use]
    pub fn node_id(&self, label: Vertex) -> Option<NodeId> {
        self.index.get(&label).copied()
    }

    /// Returns the input label of a node.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<Vertex> {
        self.labels.get(node.index()).copied()
    }

    /// Returns `true` if the label is a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, label: Vertex) -> bool {
        self.index.contains_key(&label)
    }

    /// Returns the first vertex ever inserted, i.e. the first one mentioned by the input.
    #[must_use]
    pub fn first_vertex(&self) -> Option<Vertex> {
        self.labels.first().copied()
    }

    /// Returns an iterator over all vertex labels in `NodeId` order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.labels.iter().copied()
    }

    /// Returns the edges leaving `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn edges_from(&self, node: NodeId) -> &[Edge] {
        &self.outgoing[node.index()]
    }

    /// Returns the tails of the edges entering `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn edges_into(&self, node: NodeId) -> &[NodeId] {
        &self.incoming[node.index()]
    }

    /// Returns the out-degree of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing[node.index()].len()
    }

    /// Returns the in-degree of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming[node.index()].len()
    }
}

impl GraphBase for Graph {
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId::new)
    }
}

impl Successors for Graph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing[node.index()].iter().map(|edge| edge.target)
    }
}

impl WeightedSuccessors for Graph {
    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = Edge> {
        self.outgoing[node.index()].iter().copied()
    }
}

impl Predecessors for Graph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()].iter().copied()
    }
}
