//! Design-by-contract decorator for augmented graphs.

use std::collections::HashSet;
use std::fmt;

use crate::algorithms;
use crate::graph::{AugmentedGraph, Graph};
use crate::{Error, Result};

/// A contract-checking decorator for an [`AugmentedGraph`].
///
/// [`Checked::new`] validates the full graph invariant once, up front; after
/// that, each accessor checks only the "is this a known node/edge"
/// precondition and panics with a descriptive message on violation, instead
/// of the undefined behavior a plain implementation is allowed.
///
/// The decorator is meant for flushing out programming errors at a contract
/// boundary; production call sites that trust their graphs use the wrapped
/// graph directly.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{Augmented, BasicGraph, Checked, Graph};
///
/// let mut graph = BasicGraph::new();
/// graph.add_edge("a", "b");
///
/// let checked = Checked::new(Augmented::new(&graph)).unwrap();
/// checked.edges_from(&"a");   // fine
/// // checked.edges_from(&"z"); // panics: not a node of this graph
/// ```
#[derive(Clone, Debug)]
pub struct Checked<G: AugmentedGraph> {
    graph: G,
    edges: HashSet<G::Edge>,
}

impl<G> Checked<G>
where
    G: AugmentedGraph,
    G::Node: fmt::Debug,
    G::Edge: fmt::Debug,
{
    /// A contract-checking version of `graph`.
    ///
    /// Checks the whole-graph invariant (every edge listed under a node has
    /// that node as its source, every edge target is a node, and the reverse
    /// adjacency is consistent) and records the edge set for later
    /// membership checks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] when the invariant does not hold.
    pub fn new(graph: G) -> Result<Self> {
        if !algorithms::augmented_invariant(&graph) {
            return Err(Error::Contract(
                "adjacency lists are inconsistent with edge endpoints".into(),
            ));
        }
        let edges = algorithms::edge_set(&graph);
        Ok(Checked { graph, edges })
    }

    /// True if and only if `edge` is an edge of this graph.
    #[must_use]
    pub fn is_edge(&self, edge: &G::Edge) -> bool {
        self.edges.contains(edge)
    }

    /// The wrapped graph.
    pub fn original(&self) -> &G {
        &self.graph
    }

    fn assert_node(&self, node: &G::Node) {
        assert!(
            self.graph.is_node(node),
            "{node:?} is not a node of this graph"
        );
    }

    fn assert_edge(&self, edge: &G::Edge) {
        assert!(self.is_edge(edge), "{edge:?} is not an edge of this graph");
    }
}

impl<G> Graph for Checked<G>
where
    G: AugmentedGraph,
    G::Node: fmt::Debug,
    G::Edge: fmt::Debug,
{
    type Node = G::Node;
    type Edge = G::Edge;

    fn nodes(&self) -> &[Self::Node] {
        self.graph.nodes()
    }

    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        self.assert_node(node);
        self.graph.edges_from(node)
    }

    /// # Panics
    ///
    /// Panics if `edge` is not an edge of this graph.
    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.assert_edge(edge);
        self.graph.source_of(edge)
    }

    /// # Panics
    ///
    /// Panics if `edge` is not an edge of this graph.
    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.assert_edge(edge);
        self.graph.target_of(edge)
    }
}

impl<G> AugmentedGraph for Checked<G>
where
    G: AugmentedGraph,
    G::Node: fmt::Debug,
    G::Edge: fmt::Debug,
{
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    fn edges_to(&self, node: &Self::Node) -> &[Self::Edge] {
        self.assert_node(node);
        self.graph.edges_to(node)
    }

    fn is_node(&self, node: &Self::Node) -> bool {
        self.graph.is_node(node)
    }
}
