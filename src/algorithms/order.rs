//! Node orderings, reachability and cycle detection.

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::graph::{AugmentedGraph, Graph};
use crate::search::{dfs, dfs_from, DfsVisitor};

struct FinishOrder<N> {
    order: Vec<N>,
}

impl<N: Clone, E> DfsVisitor<N, E> for FinishOrder<N> {
    fn finish_node(&mut self, node: &N) -> ControlFlow<()> {
        self.order.push(node.clone());
        ControlFlow::Continue(())
    }
}

/// All nodes of the graph in order of decreasing DFS finishing time.
///
/// This is the root order Kosaraju's second pass requires; on an acyclic
/// graph it is also a topological order.
#[must_use]
pub fn nodes_by_decreasing_dfs_finish<G: Graph>(graph: &G) -> Vec<G::Node> {
    let mut visitor = FinishOrder { order: Vec::new() };
    let _ = dfs(graph, &mut visitor);
    visitor.order.reverse();
    visitor.order
}

struct Discovered<N> {
    nodes: HashSet<N>,
}

impl<N: Clone + Eq + std::hash::Hash, E> DfsVisitor<N, E> for Discovered<N> {
    fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
        self.nodes.insert(node.clone());
        ControlFlow::Continue(())
    }
}

/// The set of nodes reachable from the given roots (the roots included).
#[must_use]
pub fn nodes_reachable_from<G: Graph>(graph: &G, roots: &[G::Node]) -> HashSet<G::Node> {
    let mut visitor = Discovered {
        nodes: HashSet::new(),
    };
    let _ = dfs_from(graph, roots, &mut visitor);
    visitor.nodes
}

/// The set of nodes reachable from a single root (the root included).
#[must_use]
pub fn nodes_reachable_from_root<G: Graph>(graph: &G, root: &G::Node) -> HashSet<G::Node> {
    nodes_reachable_from(graph, std::slice::from_ref(root))
}

struct BreakOnBackEdge;

impl<N, E> DfsVisitor<N, E> for BreakOnBackEdge {
    fn back_edge(&mut self, _edge: &E) -> ControlFlow<()> {
        ControlFlow::Break(())
    }
}

/// True if and only if the graph is acyclic.
///
/// A back edge found during depth-first search aborts the search and
/// witnesses a cycle; a completed search without one proves acyclicity.
/// Not meaningful on an [`Undirected`](crate::graph::Undirected) view,
/// where back edges are ubiquitous; call this on directed graphs only.
#[must_use]
pub fn is_acyclic<G: Graph>(graph: &G) -> bool {
    dfs(graph, &mut BreakOnBackEdge).is_continue()
}

/// All nodes of the graph in increasing order of outdegree.
///
/// The sort is stable: nodes of equal outdegree keep their `nodes()` order.
#[must_use]
pub fn nodes_by_increasing_outdegree<G: Graph>(graph: &G) -> Vec<G::Node> {
    let mut nodes = graph.nodes().to_vec();
    nodes.sort_by_key(|node| graph.edges_from(node).len());
    nodes
}

/// All nodes of the graph in increasing order of indegree.
///
/// The sort is stable: nodes of equal indegree keep their `nodes()` order.
#[must_use]
pub fn nodes_by_increasing_indegree<G: AugmentedGraph>(graph: &G) -> Vec<G::Node> {
    let mut nodes = graph.nodes().to_vec();
    nodes.sort_by_key(|node| graph.edges_to(node).len());
    nodes
}
