//! Transpose view of an augmented graph.

use crate::graph::{AugmentedGraph, Graph};

/// A transposed view of an [`AugmentedGraph`].
///
/// The view holds no storage of its own: it shares the wrapped graph's node
/// and edge values and merely swaps the four core accessors,
/// `edges_from`/`edges_to` and `source_of`/`target_of`. Transposition is
/// created from augmented graphs because the information needed to transpose
/// is exactly what an augmented graph already has.
///
/// Transposing twice is the identity: [`transposed`](Transposed::transposed)
/// returns the wrapped graph itself rather than wrapping again, keeping
/// adapter chains O(1) deep.
///
/// Neither the wrapped graph nor the view may be mutated while the view is
/// alive; the borrow checker enforces this when wrapping by reference.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{Augmented, BasicGraph, Graph, Transposed};
///
/// let mut graph = BasicGraph::new();
/// let edge = graph.add_edge("a", "b");
///
/// let augmented = Augmented::new(&graph);
/// let transposed = Transposed::new(&augmented);
///
/// assert_eq!(transposed.source_of(&edge), &"b");
/// assert_eq!(transposed.target_of(&edge), &"a");
/// assert_eq!(transposed.edges_from(&"b"), &[edge]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Transposed<G: AugmentedGraph> {
    graph: G,
}

impl<G: AugmentedGraph> Transposed<G> {
    /// A transposed view of `graph`. O(1).
    #[must_use]
    pub fn new(graph: G) -> Self {
        Transposed { graph }
    }

    /// The transposed version of this view: the original graph itself.
    ///
    /// This is a true identity, not a double wrap.
    #[must_use]
    pub fn transposed(self) -> G {
        self.graph
    }

    /// The graph this view transposes.
    pub fn original(&self) -> &G {
        &self.graph
    }
}

impl<G: AugmentedGraph> Graph for Transposed<G> {
    type Node = G::Node;
    type Edge = G::Edge;

    fn nodes(&self) -> &[Self::Node] {
        self.graph.nodes()
    }

    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        self.graph.edges_to(node)
    }

    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.graph.target_of(edge)
    }

    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.graph.source_of(edge)
    }
}

impl<G: AugmentedGraph> AugmentedGraph for Transposed<G> {
    fn edges_to(&self, node: &Self::Node) -> &[Self::Edge] {
        self.graph.edges_from(node)
    }

    fn is_node(&self, node: &Self::Node) -> bool {
        self.graph.is_node(node)
    }
}
