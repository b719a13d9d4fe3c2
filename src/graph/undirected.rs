//! Undirected view of a directed graph.

use std::collections::HashMap;

use crate::graph::Graph;

/// An edge of an [`Undirected`] view.
///
/// The undirected view does not share edge values with the wrapped graph:
/// every original edge is carried as `Forward`, and every non-self edge
/// additionally appears as an `Inverted` wrapper in its target's outgoing
/// list. An inverted edge is a distinct identity over the original edge, not
/// a new edge value; it exists only so `source_of`/`target_of` can report
/// the flipped endpoints while [`Undirected::uninverted_of`] recovers the
/// original.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum UndirectedEdge<E> {
    /// The original edge, in its original direction.
    Forward(E),
    /// The synthesized reverse counterpart of a non-self edge.
    Inverted(E),
}

/// An undirected view of an underlying directed [`Graph`].
///
/// Construction is a two-phase build: the first pass copies every node's
/// outgoing list as a base, the second pass appends an
/// [`UndirectedEdge::Inverted`] counterpart to the target node's list for
/// every edge `(a, b)` with `a != b` (self edges are not duplicated). Both
/// passes complete before the view is usable, because an edge's inverted
/// destination is only known once all forward edges have been enumerated.
///
/// Undirected views are created from unaugmented graphs; augmented
/// information has no use here. To build one from an
/// [`Augmented`](crate::graph::Augmented) graph without stacking adapters,
/// use [`Augmented::undirected`](crate::graph::Augmented::undirected).
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{BasicGraph, Graph, Undirected, UndirectedEdge};
///
/// let mut graph = BasicGraph::new();
/// let edge = graph.add_edge("a", "b");
///
/// let undirected = Undirected::new(&graph);
/// let back = &undirected.edges_from(&"b")[0];
///
/// assert_eq!(undirected.source_of(back), &"b");
/// assert_eq!(undirected.target_of(back), &"a");
/// assert_eq!(undirected.uninverted_of(back), &edge);
/// ```
#[derive(Clone, Debug)]
pub struct Undirected<G: Graph> {
    graph: G,
    adjacency: HashMap<G::Node, Vec<UndirectedEdge<G::Edge>>>,
}

impl<G: Graph> Undirected<G> {
    /// Builds the undirected view of `graph`. O(N+E).
    ///
    /// Build from the directed graph, not from a view that is already
    /// undirected: a second projection adds nothing and doubles every
    /// non-self edge identity again.
    #[must_use]
    pub fn new(graph: G) -> Self {
        let mut adjacency: HashMap<G::Node, Vec<UndirectedEdge<G::Edge>>> = HashMap::new();
        for node in graph.nodes() {
            adjacency.insert(
                node.clone(),
                graph
                    .edges_from(node)
                    .iter()
                    .cloned()
                    .map(UndirectedEdge::Forward)
                    .collect(),
            );
        }
        for node in graph.nodes() {
            for edge in graph.edges_from(node) {
                let target = graph.target_of(edge);
                if target != graph.source_of(edge) {
                    // first pass inserted every node
                    adjacency
                        .get_mut(target)
                        .unwrap()
                        .push(UndirectedEdge::Inverted(edge.clone()));
                }
            }
        }
        Undirected { graph, adjacency }
    }

    /// The underlying uninverted edge of `edge`.
    pub fn uninverted_of<'a>(&self, edge: &'a UndirectedEdge<G::Edge>) -> &'a G::Edge {
        match edge {
            UndirectedEdge::Forward(original) | UndirectedEdge::Inverted(original) => original,
        }
    }

    /// True if and only if `node` is a node of this graph.
    #[must_use]
    pub fn is_node(&self, node: &G::Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// The wrapped directed graph.
    pub fn original(&self) -> &G {
        &self.graph
    }
}

impl<G: Graph> Graph for Undirected<G> {
    type Node = G::Node;
    type Edge = UndirectedEdge<G::Edge>;

    fn nodes(&self) -> &[Self::Node] {
        self.graph.nodes()
    }

    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        &self.adjacency[node]
    }

    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        match edge {
            UndirectedEdge::Forward(original) => self.graph.source_of(original),
            UndirectedEdge::Inverted(original) => self.graph.target_of(original),
        }
    }

    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        match edge {
            UndirectedEdge::Forward(original) => self.graph.target_of(original),
            UndirectedEdge::Inverted(original) => self.graph.source_of(original),
        }
    }
}
