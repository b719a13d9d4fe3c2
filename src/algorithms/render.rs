//! Diagnostic string rendering of graphs.

use std::collections::HashMap;
use std::fmt::Display;

use crate::algorithms::inspect::edges;
use crate::graph::Graph;

/// A string representation of the graph, where node ids are the nodes
/// themselves and edge ids are assigned from a counter.
///
/// One line per node in `nodes()` order, formatted
/// `<node>: <target>[<id>] <target>[<id>] …;` with the colon omitted for
/// nodes without outgoing edges. Edge ids are 1-based and assigned in
/// edge-enumeration order (see [`edges`]), so the rendering is fully
/// deterministic. The exact format is part of the crate's compatibility
/// surface and exercised byte-for-byte by tests.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{algorithms, BasicGraph};
///
/// let graph = BasicGraph::from_rows(&[&["a", "b", "c"][..], &["b"][..], &["c"][..]]);
/// assert_eq!(algorithms::as_string(&graph), "a: b[1] c[2];\nb;\nc;\n");
/// ```
#[must_use]
pub fn as_string<G>(graph: &G) -> String
where
    G: Graph,
    G::Node: Display,
{
    let mut ids = HashMap::new();
    for edge in edges(graph) {
        let id = ids.len() + 1;
        ids.insert(edge.clone(), id);
    }
    as_string_with(graph, ToString::to_string, |edge| {
        ids.get(edge).map(usize::to_string)
    })
}

/// A string representation of the graph with caller-supplied node and edge
/// id functions.
///
/// `edge_id` returning `None` omits the bracketed id for that edge.
#[must_use]
pub fn as_string_with<G, NodeId, EdgeId>(graph: &G, node_id: NodeId, edge_id: EdgeId) -> String
where
    G: Graph,
    NodeId: Fn(&G::Node) -> String,
    EdgeId: Fn(&G::Edge) -> Option<String>,
{
    let mut result = String::new();
    for node in graph.nodes() {
        result.push_str(&node_id(node));
        if !graph.edges_from(node).is_empty() {
            result.push(':');
        }
        for edge in graph.edges_from(node) {
            result.push(' ');
            result.push_str(&node_id(graph.target_of(edge)));
            if let Some(id) = edge_id(edge) {
                result.push('[');
                result.push_str(&id);
                result.push(']');
            }
        }
        result.push_str(";\n");
    }
    result
}
