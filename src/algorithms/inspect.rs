//! Edge enumeration, node/edge sets and structural predicates.

use std::collections::HashSet;

use crate::graph::{AugmentedGraph, Graph};

/// A sequence of all edges of the graph.
///
/// Edges are enumerated by flattening `edges_from` across all nodes in
/// `nodes()` order. This enumeration order is the one
/// [`as_string`](crate::algorithms::as_string) uses to assign edge ids.
pub fn edges<'g, G: Graph>(graph: &'g G) -> impl Iterator<Item = &'g G::Edge> + 'g {
    graph
        .nodes()
        .iter()
        .flat_map(move |node| graph.edges_from(node).iter())
}

/// A set of all edges of the graph.
#[must_use]
pub fn edge_set<G: Graph>(graph: &G) -> HashSet<G::Edge> {
    edges(graph).cloned().collect()
}

/// A set of all nodes of the graph.
#[must_use]
pub fn node_set<G: Graph>(graph: &G) -> HashSet<G::Node> {
    graph.nodes().iter().cloned().collect()
}

/// True if and only if the adjacency-list invariant of the graph holds:
/// every edge reachable via `edges_from(n)` has `n` as its source, and its
/// target is a node of the graph.
#[must_use]
pub fn invariant<G: Graph>(graph: &G) -> bool {
    let nodes: HashSet<&G::Node> = graph.nodes().iter().collect();
    graph.nodes().iter().all(|node| {
        graph.edges_from(node).iter().all(|edge| {
            graph.source_of(edge) == node && nodes.contains(graph.target_of(edge))
        })
    })
}

/// True if and only if the invariant of an augmented graph holds: the plain
/// invariant, plus reverse adjacency consistent with edge endpoints, plus
/// `is_node` agreeing with the node list.
#[must_use]
pub fn augmented_invariant<G: AugmentedGraph>(graph: &G) -> bool {
    let nodes: HashSet<&G::Node> = graph.nodes().iter().collect();
    invariant(graph)
        && graph.nodes().iter().all(|node| graph.is_node(node))
        && graph.nodes().iter().all(|node| {
            graph.edges_to(node).iter().all(|edge| {
                graph.target_of(edge) == node && nodes.contains(graph.source_of(edge))
            })
        })
}

/// True if and only if the given graphs have the same nodes and edges.
#[must_use]
pub fn same_nodes_and_edges<G, H>(lhs: &G, rhs: &H) -> bool
where
    G: Graph,
    H: Graph<Node = G::Node, Edge = G::Edge>,
{
    node_set(lhs) == node_set(rhs) && edge_set(lhs) == edge_set(rhs)
}

/// True if and only if `node` is the target of `edge`.
#[must_use]
pub fn is_incoming<G: Graph>(graph: &G, edge: &G::Edge, node: &G::Node) -> bool {
    graph.target_of(edge) == node
}

/// True if and only if `edge` is a self edge.
#[must_use]
pub fn is_self<G: Graph>(graph: &G, edge: &G::Edge) -> bool {
    graph.source_of(edge) == graph.target_of(edge)
}

/// The other endpoint of `edge`, given one of its endpoints.
///
/// For a self edge both endpoints coincide and that node is returned.
pub fn other_node<'a, G: Graph>(graph: &'a G, edge: &'a G::Edge, node: &G::Node) -> &'a G::Node {
    debug_assert!(
        graph.source_of(edge) == node || graph.target_of(edge) == node,
        "node is not an endpoint of the edge"
    );
    if graph.target_of(edge) == node {
        graph.source_of(edge)
    } else {
        graph.target_of(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Augmented, BasicGraph, Transposed};
    use crate::test;

    #[test]
    fn test_edges_enumeration_order() {
        let graph = test::abcdefghij_graph();
        let rendered: Vec<String> = edges(&graph)
            .map(|edge| format!("({},{})", graph.source_of(edge), graph.target_of(edge)))
            .collect();
        assert_eq!(
            rendered.join(", "),
            "(a,b), (a,d), (b,c), (b,f), (c,a), (c,d), (c,e), (d,e), \
             (f,c), (g,f), (g,h), (h,f), (h,j), (i,h), (j,i)"
        );
    }

    #[test]
    fn test_invariant_holds_for_basic_graph() {
        assert!(invariant(&test::clothing_graph()));
        assert!(invariant(&test::uvwxyz_graph()));
    }

    #[test]
    fn test_augmented_invariant() {
        let graph = test::uvwxyz_graph();
        let augmented = Augmented::new(&graph);
        assert!(augmented_invariant(&augmented));
        assert!(augmented_invariant(&Transposed::new(&augmented)));
    }

    #[test]
    fn test_same_nodes_and_edges_on_transpose() {
        let graph = test::uvwxyz_graph();
        let augmented = Augmented::new(&graph);
        let transposed = Transposed::new(&augmented);
        assert!(same_nodes_and_edges(&graph, &transposed));
    }

    #[test]
    fn test_edge_predicates() {
        let mut graph = BasicGraph::new();
        let ab = graph.add_edge("a", "b");
        let cc = graph.add_edge("c", "c");

        assert!(is_incoming(&graph, &ab, &"b"));
        assert!(!is_incoming(&graph, &ab, &"a"));
        assert!(is_self(&graph, &cc));
        assert!(!is_self(&graph, &ab));
        assert_eq!(other_node(&graph, &ab, &"a"), &"b");
        assert_eq!(other_node(&graph, &ab, &"b"), &"a");
    }
}
