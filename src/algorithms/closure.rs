//! Transitive irreflexive closure.

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::graph::Graph;
use crate::search::{dfs_from_root, DfsVisitor};

/// The transitive irreflexive closure of an underlying graph.
///
/// Nodes are shared with the underlying graph; edges are `(source, target)`
/// pairs manufactured by [`transitive_irreflexive_closure`]. Per-node edge
/// lists follow the discovery order of that node's depth-first search.
#[derive(Clone, Debug)]
pub struct Closure<'g, G: Graph> {
    graph: &'g G,
    adjacency: HashMap<G::Node, Vec<(G::Node, G::Node)>>,
}

impl<G: Graph> Graph for Closure<'_, G> {
    type Node = G::Node;
    type Edge = (G::Node, G::Node);

    fn nodes(&self) -> &[Self::Node] {
        self.graph.nodes()
    }

    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        match self.adjacency.get(node) {
            Some(edges) => edges.as_slice(),
            None => &[],
        }
    }

    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        &edge.0
    }

    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        &edge.1
    }
}

struct ReachableTargets<'r, N> {
    root: &'r N,
    edges: Vec<(N, N)>,
}

impl<N: Clone + Eq, E> DfsVisitor<N, E> for ReachableTargets<'_, N> {
    fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
        if node != self.root {
            self.edges.push((self.root.clone(), node.clone()));
        }
        ControlFlow::Continue(())
    }
}

/// The transitive irreflexive closure of the graph.
///
/// For every node, a depth-first search restricted to that single root
/// turns each other discovered node into a closure edge from the root;
/// self-targets are excluded, which is what makes the closure irreflexive
/// even on cyclic graphs. Every root's search is independent; no state is
/// shared across roots.
///
/// Computing the closure of an already-closed graph yields the same edge
/// set of `(source, target)` pairs.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{algorithms, BasicGraph, Graph};
///
/// let graph = BasicGraph::from_rows(&[&["a", "b"][..], &["b", "c"][..], &["c"][..]]);
/// let closure = algorithms::transitive_irreflexive_closure(&graph);
///
/// assert_eq!(closure.edges_from(&"a"), &[("a", "b"), ("a", "c")]);
/// ```
#[must_use]
pub fn transitive_irreflexive_closure<G: Graph>(graph: &G) -> Closure<'_, G> {
    let mut adjacency = HashMap::new();
    for root in graph.nodes() {
        let mut visitor = ReachableTargets {
            root,
            edges: Vec::new(),
        };
        let _ = dfs_from_root(graph, root, &mut visitor);
        if !visitor.edges.is_empty() {
            adjacency.insert(root.clone(), visitor.edges);
        }
    }
    Closure { graph, adjacency }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{as_string, edge_set};
    use crate::test;

    #[test]
    fn test_closure_on_clothing() {
        let graph = test::clothing_graph();
        assert_eq!(
            as_string(&transitive_irreflexive_closure(&graph)),
            "belt: jacket[1];\n\
             jacket;\n\
             pants: shoes[2] belt[3] jacket[4];\n\
             shirt: tie[5] jacket[6] belt[7];\n\
             shoes;\n\
             socks: shoes[8];\n\
             tie: jacket[9];\n\
             undershorts: pants[10] shoes[11] belt[12] jacket[13];\n\
             watch;\n"
        );
    }

    #[test]
    fn test_closure_on_uvwxyz() {
        // Cyclic graph with a self edge: z reaches only itself, which the
        // irreflexive closure drops.
        let graph = test::uvwxyz_graph();
        assert_eq!(
            as_string(&transitive_irreflexive_closure(&graph)),
            "u: v[1] y[2] x[3];\n\
             v: y[4] x[5];\n\
             w: y[6] x[7] v[8] z[9];\n\
             x: v[10] y[11];\n\
             y: x[12] v[13];\n\
             z;\n"
        );
    }

    #[test]
    fn test_closure_is_idempotent() {
        let graph = test::uvwxyz_graph();
        let once = transitive_irreflexive_closure(&graph);
        let twice = transitive_irreflexive_closure(&once);
        assert_eq!(edge_set(&once), edge_set(&twice));
    }
}
