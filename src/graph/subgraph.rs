//! Restrictions of a graph to node or edge subsets.

use std::collections::{HashMap, HashSet};

use crate::graph::Graph;

/// A graph restricted to a subset of an underlying graph's nodes and edges.
///
/// A subgraph owns its node list and per-node edge lists but borrows the
/// underlying graph for `source_of`/`target_of`, so node and edge values are
/// shared with the original. Two constructions are provided:
///
/// - [`restricted_to_nodes`](Subgraph::restricted_to_nodes) - the induced
///   subgraph over a node subset,
/// - [`induced_by_edges`](Subgraph::induced_by_edges) - a subgraph from an
///   explicit edge list plus extra isolated nodes.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{algorithms, BasicGraph, Subgraph};
///
/// let graph = BasicGraph::from_rows(&[
///     &["a", "b", "c"][..],
///     &["b", "c"][..],
///     &["c"][..],
/// ]);
///
/// let restricted = Subgraph::restricted_to_nodes(&graph, &["a", "b"]);
/// assert_eq!(algorithms::as_string(&restricted), "a: b[1];\nb;\n");
/// ```
#[derive(Clone, Debug)]
pub struct Subgraph<'g, G: Graph> {
    graph: &'g G,
    nodes: Vec<G::Node>,
    adjacency: HashMap<G::Node, Vec<G::Edge>>,
}

impl<'g, G: Graph> Subgraph<'g, G> {
    /// The subgraph of `graph` induced by `nodes`.
    ///
    /// Node order is the given order. An edge is kept when its source is a
    /// kept node and its target also lies in the kept set; per-node edge
    /// order is the underlying order.
    ///
    /// # Panics
    ///
    /// May panic if a given node is not a node of `graph`.
    #[must_use]
    pub fn restricted_to_nodes(graph: &'g G, nodes: &[G::Node]) -> Self {
        let keep: HashSet<&G::Node> = nodes.iter().collect();
        let mut adjacency = HashMap::new();
        for node in nodes {
            let edges: Vec<G::Edge> = graph
                .edges_from(node)
                .iter()
                .filter(|edge| keep.contains(graph.target_of(edge)))
                .cloned()
                .collect();
            if !edges.is_empty() {
                adjacency.insert(node.clone(), edges);
            }
        }
        Subgraph {
            graph,
            nodes: nodes.to_vec(),
            adjacency,
        }
    }

    /// A subgraph built from an explicit edge list, additionally containing
    /// `extra_nodes`.
    ///
    /// Node order is: `extra_nodes` in the given order, then edge endpoints
    /// in first-appearance order over the edge list. Per-node edge lists
    /// follow the given edge order.
    #[must_use]
    pub fn induced_by_edges(graph: &'g G, edges: &[G::Edge], extra_nodes: &[G::Node]) -> Self {
        let mut nodes = Vec::new();
        let mut adjacency: HashMap<G::Node, Vec<G::Edge>> = HashMap::new();
        let mut seen = HashSet::new();

        let mut add_node = |node: &G::Node, nodes: &mut Vec<G::Node>| {
            if seen.insert(node.clone()) {
                nodes.push(node.clone());
            }
        };

        for node in extra_nodes {
            add_node(node, &mut nodes);
        }
        for edge in edges {
            let source = graph.source_of(edge);
            add_node(source, &mut nodes);
            add_node(graph.target_of(edge), &mut nodes);
            adjacency
                .entry(source.clone())
                .or_default()
                .push(edge.clone());
        }

        Subgraph {
            graph,
            nodes,
            adjacency,
        }
    }

    /// The underlying graph this subgraph restricts.
    pub fn original(&self) -> &'g G {
        self.graph
    }
}

impl<G: Graph> Graph for Subgraph<'_, G> {
    type Node = G::Node;
    type Edge = G::Edge;

    fn nodes(&self) -> &[Self::Node] {
        &self.nodes
    }

    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        match self.adjacency.get(node) {
            Some(edges) => edges.as_slice(),
            None => &[],
        }
    }

    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.graph.source_of(edge)
    }

    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        self.graph.target_of(edge)
    }
}
