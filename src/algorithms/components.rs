//! Connected and strongly connected components.

use std::ops::ControlFlow;

use crate::algorithms::order::nodes_by_decreasing_dfs_finish;
use crate::graph::{Augmented, Graph, Subgraph, Transposed, Undirected};
use crate::search::{dfs, dfs_from, DfsVisitor};

struct ComponentCollector<'g, G: Graph> {
    graph: &'g G,
    current: Vec<G::Node>,
    components: Vec<Subgraph<'g, G>>,
}

impl<'g, G: Graph, E> DfsVisitor<G::Node, E> for ComponentCollector<'g, G> {
    fn discover_root(&mut self, _node: &G::Node) -> ControlFlow<()> {
        self.current.clear();
        ControlFlow::Continue(())
    }

    fn discover_node(&mut self, node: &G::Node) -> ControlFlow<()> {
        self.current.push(node.clone());
        ControlFlow::Continue(())
    }

    fn finish_root(&mut self, _node: &G::Node) -> ControlFlow<()> {
        self.components
            .push(Subgraph::restricted_to_nodes(self.graph, &self.current));
        ControlFlow::Continue(())
    }
}

/// The connected components of the graph, interpreted as undirected.
///
/// Two nodes belong to the same component when a path of edges, followed in
/// either direction, connects them. Each component is returned as a
/// restriction of the *directed* graph to the component's nodes; component
/// order follows root discovery order, and node order within a component
/// follows discovery order over the undirected view.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{algorithms, BasicGraph};
///
/// let graph = BasicGraph::from_rows(&[
///     &["a", "b"][..],
///     &["b"][..],
///     &["loner"][..],
/// ]);
///
/// let components = algorithms::connected_components(&graph);
/// assert_eq!(components.len(), 2);
/// ```
#[must_use]
pub fn connected_components<G: Graph>(graph: &G) -> Vec<Subgraph<'_, G>> {
    let undirected = Undirected::new(graph);
    let mut collector = ComponentCollector {
        graph,
        current: Vec::new(),
        components: Vec::new(),
    };
    let _ = dfs(&undirected, &mut collector);
    collector.components
}

struct NodeListCollector<N> {
    current: Vec<N>,
    components: Vec<Vec<N>>,
}

impl<N: Clone, E> DfsVisitor<N, E> for NodeListCollector<N> {
    fn discover_root(&mut self, _node: &N) -> ControlFlow<()> {
        self.current = Vec::new();
        ControlFlow::Continue(())
    }

    fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
        self.current.push(node.clone());
        ControlFlow::Continue(())
    }

    fn finish_root(&mut self, _node: &N) -> ControlFlow<()> {
        self.components.push(std::mem::take(&mut self.current));
        ControlFlow::Continue(())
    }
}

/// The strongly connected components of the directed graph, via Kosaraju's
/// two-pass algorithm.
///
/// Pass one is a depth-first search over the graph collecting nodes by
/// decreasing finishing time; pass two searches the transposed graph using
/// exactly that order as the root sequence. Each root's tree in pass two is
/// one strongly connected component. The root ordering is what makes this
/// correct, not mere iteration convenience.
///
/// Components are emitted in pass-two root order; nodes within a component
/// in pass-two discovery order.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{algorithms, BasicGraph};
///
/// let graph = BasicGraph::from_rows(&[
///     &["a", "b"][..],
///     &["b", "a", "c"][..],
///     &["c"][..],
/// ]);
///
/// let components = algorithms::strongly_connected_components(&graph);
/// assert_eq!(components, vec![vec!["a", "b"], vec!["c"]]);
/// ```
#[must_use]
pub fn strongly_connected_components<G: Graph>(graph: &G) -> Vec<Vec<G::Node>> {
    let roots = nodes_by_decreasing_dfs_finish(graph);
    let augmented = Augmented::new(graph);
    let transposed = Transposed::new(&augmented);

    let mut collector = NodeListCollector {
        current: Vec::new(),
        components: Vec::new(),
    };
    let _ = dfs_from(&transposed, &roots, &mut collector);
    collector.components
}
