//! Concrete adjacency-list graph with caller-supplied node values.
//!
//! [`BasicGraph`] is the reference implementation of the [`Graph`] contract.
//! It stores nodes in insertion order and manufactures its own edge
//! identities ([`BasicEdge`]) with sequential keys, so parallel edges between
//! the same endpoints remain distinct values.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::graph::Graph;

/// An edge of a [`BasicGraph`].
///
/// A `BasicEdge` carries its endpoints plus a sequential key assigned at
/// insertion time. The key participates in equality and hashing, which is
/// what makes two parallel edges between the same pair of nodes distinct
/// identities.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BasicEdge<N> {
    source: N,
    target: N,
    key: u64,
}

impl<N> BasicEdge<N> {
    /// The source node of this edge.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// The target node of this edge.
    pub fn target(&self) -> &N {
        &self.target
    }

    /// The sequential key assigned when this edge was inserted (1-based).
    pub fn key(&self) -> u64 {
        self.key
    }
}

impl<N: fmt::Display> fmt::Display for BasicEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})[{}]", self.source, self.target, self.key)
    }
}

/// A directed multigraph over caller-supplied node values.
///
/// Nodes are kept in insertion order; each node's outgoing edges are kept in
/// insertion order as well. Both orders are observable through the [`Graph`]
/// contract and decide tie-breaks in every derived algorithm.
///
/// The graph is intended to be built up once and then treated as an
/// immutable snapshot. Mutating it while an adapter or a search borrows it
/// is prevented by the borrow checker.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{BasicGraph, Graph};
///
/// let mut graph = BasicGraph::new();
/// graph.add_node("a");
/// let edge = graph.add_edge("a", "b"); // "b" is added on demand
///
/// assert_eq!(graph.nodes(), &["a", "b"]);
/// assert_eq!(graph.edges_from(&"a"), &[edge]);
/// ```
#[derive(Clone, Debug)]
pub struct BasicGraph<N: Clone + Eq + Hash> {
    nodes: Vec<N>,
    adjacency: HashMap<N, Vec<BasicEdge<N>>>,
    next_key: u64,
}

impl<N: Clone + Eq + Hash> Default for BasicGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> BasicGraph<N> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        BasicGraph {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
            next_key: 0,
        }
    }

    /// A graph created from an "association table" representation.
    ///
    /// The first element of each row is a node; the remaining elements are
    /// the targets of that node's outgoing edges, in order. Row heads are
    /// added as nodes first, in row order, so the node order of the graph is
    /// the row order. Any target that never appears as a row head is
    /// appended as a node afterwards, keeping the graph invariant intact.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use graphwalk::BasicGraph;
    ///
    /// let graph = BasicGraph::from_rows(&[
    ///     &["a", "b", "c"][..], // a -> b, a -> c
    ///     &["b", "c"][..],      // b -> c
    ///     &["c"][..],           // c has no outgoing edges
    /// ]);
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 3);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&[N]]) -> Self {
        let mut graph = BasicGraph::new();
        for row in rows {
            if let Some(head) = row.first() {
                graph.add_node(head.clone());
            }
        }
        for row in rows {
            if let Some((head, targets)) = row.split_first() {
                for target in targets {
                    graph.add_edge(head.clone(), target.clone());
                }
            }
        }
        graph
    }

    /// Adds `node` to the graph, but only if no equal node is present.
    ///
    /// Calling this repeatedly with equal values is a no-op after the first
    /// call, so node order is decided by first insertion.
    pub fn add_node(&mut self, node: N) {
        if !self.adjacency.contains_key(&node) {
            self.nodes.push(node.clone());
            self.adjacency.insert(node, Vec::new());
        }
    }

    /// Adds a new edge from `source` to `target` and returns it.
    ///
    /// Endpoints that are not yet nodes of the graph are added on demand.
    /// Every call creates a fresh edge identity: adding the same endpoint
    /// pair twice produces two parallel edges, and `source == target`
    /// produces a self edge.
    pub fn add_edge(&mut self, source: N, target: N) -> BasicEdge<N> {
        self.add_node(source.clone());
        self.add_node(target.clone());

        self.next_key += 1;
        let edge = BasicEdge {
            source: source.clone(),
            target,
            key: self.next_key,
        };

        // add_node above guarantees the entry exists
        self.adjacency.get_mut(&source).unwrap().push(edge.clone());
        edge
    }

    /// The number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if and only if `node` is a node of this graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}

impl<N: Clone + Eq + Hash> Graph for BasicGraph<N> {
    type Node = N;
    type Edge = BasicEdge<N>;

    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn edges_from(&self, node: &N) -> &[BasicEdge<N>] {
        &self.adjacency[node]
    }

    fn source_of<'a>(&'a self, edge: &'a BasicEdge<N>) -> &'a N {
        &edge.source
    }

    fn target_of<'a>(&'a self, edge: &'a BasicEdge<N>) -> &'a N {
        &edge.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph: BasicGraph<&str> = BasicGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = BasicGraph::new();
        graph.add_node("a");
        graph.add_node("a");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes(), &["a"]);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = BasicGraph::new();
        let edge = graph.add_edge("a", "b");

        assert_eq!(graph.nodes(), &["a", "b"]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.source_of(&edge), &"a");
        assert_eq!(graph.target_of(&edge), &"b");
        assert_eq!(edge.key(), 1);
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let mut graph = BasicGraph::new();
        let first = graph.add_edge("a", "b");
        let second = graph.add_edge("a", "b");

        assert_ne!(first, second);
        assert_eq!(graph.edges_from(&"a"), &[first, second]);
    }

    #[test]
    fn test_self_edge() {
        let mut graph = BasicGraph::new();
        let edge = graph.add_edge("a", "a");

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.source_of(&edge), graph.target_of(&edge));
    }

    #[test]
    fn test_from_rows_node_order_is_row_order() {
        let graph = BasicGraph::from_rows(&[
            &["belt", "jacket"][..],
            &["jacket"][..],
            &["pants", "shoes", "belt"][..],
            &["shoes"][..],
        ]);

        assert_eq!(graph.nodes(), &["belt", "jacket", "pants", "shoes"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_from_rows_appends_headless_targets() {
        let graph = BasicGraph::from_rows(&[&["a", "b"][..]]);
        assert_eq!(graph.nodes(), &["a", "b"]);
        assert!(graph.edges_from(&"b").is_empty());
    }

    #[test]
    fn test_edges_from_order() {
        let graph = BasicGraph::from_rows(&[&["a", "c", "b"][..], &["b"][..], &["c"][..]]);
        let targets: Vec<_> = graph
            .edges_from(&"a")
            .iter()
            .map(|edge| *graph.target_of(edge))
            .collect();
        assert_eq!(targets, vec!["c", "b"]);
    }
}
