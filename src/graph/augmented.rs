//! Reverse-adjacency augmentation of a graph.

use std::collections::HashMap;

use crate::graph::{AugmentedGraph, Graph, Undirected};

/// An augmented version of an underlying [`Graph`].
///
/// Construction performs a single pass over all edges (flattening
/// `edges_from` across all nodes in `nodes()` order) to populate a node →
/// incoming-edge mapping; nodes with no incoming edges get an explicit empty
/// list so [`edges_to`](AugmentedGraph::edges_to) never needs a missing-key
/// check downstream. The per-node lists are in global edge-enumeration
/// order, which is what makes transposed renderings deterministic.
///
/// The wrapped graph may be held by value or by reference (`&G` implements
/// [`Graph`] too). A graph that already implements [`AugmentedGraph`] never
/// needs this adapter: functions that require reverse adjacency take
/// `G: AugmentedGraph` and use such a graph as-is, so augmentation is
/// idempotent at the type level.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{Augmented, AugmentedGraph, BasicGraph};
///
/// let mut graph = BasicGraph::new();
/// let edge = graph.add_edge("a", "b");
///
/// let augmented = Augmented::new(&graph);
/// assert_eq!(augmented.edges_to(&"b"), &[edge]);
/// assert!(augmented.edges_to(&"a").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Augmented<G: Graph> {
    graph: G,
    incoming: HashMap<G::Node, Vec<G::Edge>>,
}

impl<G: Graph> Augmented<G> {
    /// Builds the reverse adjacency of `graph`.
    ///
    /// O(N+E). The adapter must be fully built before it is queried, which
    /// this constructor guarantees; partial construction is never
    /// observable.
    #[must_use]
    pub fn new(graph: G) -> Self {
        let mut incoming: HashMap<G::Node, Vec<G::Edge>> = HashMap::new();
        for node in graph.nodes() {
            for edge in graph.edges_from(node) {
                incoming
                    .entry(graph.target_of(edge).clone())
                    .or_default()
                    .push(edge.clone());
            }
        }
        for node in graph.nodes() {
            incoming.entry(node.clone()).or_default();
        }
        Augmented { graph, incoming }
    }

    /// The original, unaugmented graph.
    pub fn original(&self) -> &G {
        &self.graph
    }

    /// The undirected view of the original, unaugmented graph.
    ///
    /// Augmented information has no use in an undirected view, so this
    /// builds from the wrapped graph directly instead of stacking a second
    /// adapter on top of this one.
    #[must_use]
    pub fn undirected(&self) -> Undirected<&G> {
        Undirected::new(&self.graph)
    }
}

impl<G: Graph> Graph for Augmented<G> {
    type Node = G::Node;
    type Edge = G::Edge;

    fn nodes(&self) -> &[Self::Node] {
        self.graph.nodes()
    }

    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        self.graph.edges_from(node)
    }

    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.graph.source_of(edge)
    }

    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.graph.target_of(edge)
    }
}

impl<G: Graph> AugmentedGraph for Augmented<G> {
    fn edges_to(&self, node: &Self::Node) -> &[Self::Edge] {
        &self.incoming[node]
    }

    fn is_node(&self, node: &Self::Node) -> bool {
        self.incoming.contains_key(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::BasicGraph;

    #[test]
    fn test_edges_to_collects_incoming() {
        let mut graph = BasicGraph::new();
        let ab = graph.add_edge("a", "b");
        let cb = graph.add_edge("c", "b");

        let augmented = Augmented::new(&graph);
        assert_eq!(augmented.edges_to(&"b"), &[ab, cb]);
    }

    #[test]
    fn test_edges_to_empty_without_incoming() {
        let mut graph = BasicGraph::new();
        graph.add_edge("a", "b");

        let augmented = Augmented::new(&graph);
        assert!(augmented.edges_to(&"a").is_empty());
    }

    #[test]
    fn test_edges_to_enumeration_order() {
        // Incoming lists follow global edge-enumeration order, not
        // per-source insertion order.
        let graph = BasicGraph::from_rows(&[
            &["a", "c"][..],
            &["b", "c"][..],
            &["c"][..],
        ]);

        let augmented = Augmented::new(&graph);
        let sources: Vec<_> = augmented
            .edges_to(&"c")
            .iter()
            .map(|edge| *augmented.source_of(edge))
            .collect();
        assert_eq!(sources, vec!["a", "b"]);
    }

    #[test]
    fn test_is_node() {
        let mut graph = BasicGraph::new();
        graph.add_node("a");

        let augmented = Augmented::new(&graph);
        assert!(augmented.is_node(&"a"));
        assert!(!augmented.is_node(&"b"));
    }

    #[test]
    fn test_self_edge_is_its_own_incoming() {
        let mut graph = BasicGraph::new();
        let aa = graph.add_edge("a", "a");

        let augmented = Augmented::new(&graph);
        assert_eq!(augmented.edges_to(&"a"), &[aa]);
    }

    #[test]
    fn test_undirected_unwraps_to_the_original() {
        let mut graph = BasicGraph::new();
        let edge = graph.add_edge("a", "b");

        let augmented = Augmented::new(&graph);
        let undirected = augmented.undirected();

        assert!(std::ptr::eq(**undirected.original(), &graph));
        assert_eq!(undirected.uninverted_of(&undirected.edges_from(&"b")[0]), &edge);
    }

    #[test]
    fn test_forward_accessors_forward() {
        let mut graph = BasicGraph::new();
        let edge = graph.add_edge("a", "b");

        let augmented = Augmented::new(&graph);
        assert_eq!(augmented.nodes(), graph.nodes());
        assert_eq!(augmented.edges_from(&"a"), &[edge]);
    }
}
