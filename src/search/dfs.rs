//! Depth-first search template.

use std::ops::ControlFlow;

use crate::graph::Graph;
use crate::search::dispenser::Discipline;
use crate::search::timed::{drive, Event, Mark, SearchState, TimedSearch};

/// Event hooks for [`dfs`] and its variants.
///
/// Every hook defaults to a no-op returning `ControlFlow::Continue(())`, so
/// a visitor overrides only what it needs. Returning
/// `ControlFlow::Break(())` from any hook aborts the whole search call; the
/// engine propagates the break to the caller without handling it. This is
/// the mechanism behind early exits such as
/// [`is_acyclic`](crate::algorithms::is_acyclic).
///
/// Edge hooks classify each examined edge against the depth-first forest:
/// tree, forward, cross or back. The classification is total: each edge of
/// the searched graph triggers exactly one edge hook.
///
/// # Examples
///
/// Collecting the depth-first tree edges of a graph:
///
/// ```rust,ignore
/// use std::ops::ControlFlow;
/// use graphwalk::{dfs, BasicGraph, DfsVisitor};
///
/// struct TreeEdges<E> {
///     edges: Vec<E>,
/// }
///
/// impl<N, E: Clone> DfsVisitor<N, E> for TreeEdges<E> {
///     fn tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
///         self.edges.push(edge.clone());
///         ControlFlow::Continue(())
///     }
/// }
///
/// let graph = BasicGraph::from_rows(&[&["a", "b"][..], &["b", "c"][..], &["c"][..]]);
/// let mut visitor = TreeEdges { edges: Vec::new() };
/// let _ = dfs(&graph, &mut visitor);
/// assert_eq!(visitor.edges.len(), 2);
/// ```
#[allow(unused_variables)]
pub trait DfsVisitor<N, E> {
    /// Called once for each node before the search.
    fn init_node(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each node that is first encountered from the search
    /// root sequence.
    fn discover_root(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each discovered root after the complete search tree
    /// starting at it has been finished.
    fn finish_root(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each node, right after it is discovered as a root or
    /// through a tree edge.
    fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each node after the complete search tree starting at
    /// it has been finished.
    fn finish_node(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each tree edge as it is examined.
    fn tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each forward edge as it is examined.
    fn forward_edge(&mut self, edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each cross edge as it is examined.
    fn cross_edge(&mut self, edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each back edge as it is examined.
    fn back_edge(&mut self, edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

struct DfsDriver<'v, V> {
    visitor: &'v mut V,
}

impl<G, V> TimedSearch<G> for DfsDriver<'_, V>
where
    G: Graph,
    V: DfsVisitor<G::Node, G::Edge>,
{
    fn prepare_node(&mut self, node: &G::Node) -> ControlFlow<()> {
        self.visitor.init_node(node)
    }

    fn begin_root(&mut self, state: &mut SearchState<G>, root: &G::Node) -> ControlFlow<()> {
        state.set_mark(root, Mark::Pending);
        self.visitor.discover_root(root)
    }

    fn end_root(&mut self, root: &G::Node) -> ControlFlow<()> {
        self.visitor.finish_root(root)
    }

    fn handle_node(
        &mut self,
        state: &mut SearchState<G>,
        graph: &G,
        node: &G::Node,
    ) -> ControlFlow<()> {
        if state.mark(node) == Mark::Pending {
            let stamp = state.next_stamp();
            state.set_mark(node, Mark::Discovered(stamp));
            self.visitor.discover_node(node)?;
            // The node's own finish marker goes below its edges so it pops
            // only after the whole subtree is exhausted; edges are pushed in
            // reverse so the stack examines them in original order.
            state.agenda.push(Event::Node(node.clone()));
            for edge in graph.edges_from(node).iter().rev() {
                state.agenda.push(Event::Edge(edge.clone()));
            }
            ControlFlow::Continue(())
        } else {
            let stamp = state.next_stamp();
            state.set_mark(node, Mark::Finished(stamp));
            self.visitor.finish_node(node)
        }
    }

    fn handle_edge(
        &mut self,
        state: &mut SearchState<G>,
        graph: &G,
        edge: &G::Edge,
    ) -> ControlFlow<()> {
        let target = graph.target_of(edge);
        match state.mark(target) {
            Mark::Unseen => {
                state.set_mark(target, Mark::Pending);
                self.visitor.tree_edge(edge)?;
                state.agenda.push(Event::Node(target.clone()));
                ControlFlow::Continue(())
            }
            Mark::Pending => self.visitor.forward_edge(edge),
            Mark::Discovered(_) => self.visitor.back_edge(edge),
            Mark::Finished(finish) => {
                // The source is still on the depth-first path while its
                // out-edges are examined, so its mark holds the discovery
                // stamp.
                let discovery = match state.mark(graph.source_of(edge)) {
                    Mark::Discovered(stamp) => stamp,
                    _ => unreachable!("edge examined after its source finished"),
                };
                if finish < discovery {
                    self.visitor.cross_edge(edge)
                } else {
                    self.visitor.forward_edge(edge)
                }
            }
        }
    }
}

/// Performs depth-first search over the whole graph, examining roots in
/// `nodes()` order, and calls the visitor's event hooks.
///
/// Equivalent to [`dfs_from`] with `graph.nodes()` as the root sequence:
/// every node of the graph is visited exactly once, each unreached root
/// starting a new tree of the depth-first forest.
///
/// Returns the `ControlFlow` propagated from the visitor: `Break` if some
/// hook aborted the search, `Continue` otherwise.
pub fn dfs<G, V>(graph: &G, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: DfsVisitor<G::Node, G::Edge>,
{
    dfs_from(graph, graph.nodes(), visitor)
}

/// Performs depth-first search examining roots in the given order.
///
/// Root order is observable: it decides which tree of the depth-first
/// forest comes first, and with it the output order of derived algorithms
/// (Kosaraju's SCC pass 2 depends on exactly this). Roots already reached
/// from an earlier root are skipped.
pub fn dfs_from<G, V>(graph: &G, roots: &[G::Node], visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: DfsVisitor<G::Node, G::Edge>,
{
    drive(graph, roots, Discipline::Lifo, &mut DfsDriver { visitor })
}

/// Performs depth-first search from a single root.
pub fn dfs_from_root<G, V>(graph: &G, root: &G::Node, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: DfsVisitor<G::Node, G::Edge>,
{
    dfs_from(graph, std::slice::from_ref(root), visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::BasicGraph;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl<N: std::fmt::Display, E> DfsVisitor<N, E> for Recorder {
        fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
            self.events.push(format!("d({node})"));
            ControlFlow::Continue(())
        }

        fn finish_node(&mut self, node: &N) -> ControlFlow<()> {
            self.events.push(format!("f({node})"));
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_linear_graph_order() {
        let graph = BasicGraph::from_rows(&[&["a", "b"][..], &["b", "c"][..], &["c"][..]]);
        let mut recorder = Recorder::default();
        let flow = dfs(&graph, &mut recorder);

        assert!(flow.is_continue());
        assert_eq!(
            recorder.events,
            vec!["d(a)", "d(b)", "d(c)", "f(c)", "f(b)", "f(a)"]
        );
    }

    #[test]
    fn test_edges_examined_in_original_order() {
        // a's edges go to c then b; DFS must explore c first.
        let graph = BasicGraph::from_rows(&[&["a", "c", "b"][..], &["b"][..], &["c"][..]]);
        let mut recorder = Recorder::default();
        let _ = dfs(&graph, &mut recorder);

        assert_eq!(
            recorder.events,
            vec!["d(a)", "d(c)", "f(c)", "d(b)", "f(b)", "f(a)"]
        );
    }

    #[test]
    fn test_root_order_is_caller_determined() {
        let graph = BasicGraph::from_rows(&[&["a"][..], &["b"][..]]);
        let mut recorder = Recorder::default();
        let _ = dfs_from(&graph, &["b", "a"], &mut recorder);

        assert_eq!(recorder.events, vec!["d(b)", "f(b)", "d(a)", "f(a)"]);
    }

    #[test]
    fn test_single_root_leaves_rest_unvisited() {
        let graph = BasicGraph::from_rows(&[&["a", "b"][..], &["b"][..], &["c"][..]]);
        let mut recorder = Recorder::default();
        let _ = dfs_from_root(&graph, &"a", &mut recorder);

        assert_eq!(recorder.events, vec!["d(a)", "d(b)", "f(b)", "f(a)"]);
    }

    #[test]
    fn test_break_aborts_search() {
        struct StopAtFirst;
        impl<N, E> DfsVisitor<N, E> for StopAtFirst {
            fn discover_node(&mut self, _node: &N) -> ControlFlow<()> {
                ControlFlow::Break(())
            }
        }

        let graph = BasicGraph::from_rows(&[&["a", "b"][..], &["b"][..]]);
        let flow = dfs(&graph, &mut StopAtFirst);
        assert!(flow.is_break());
    }

    #[test]
    fn test_self_edge_is_back_edge() {
        struct BackEdges(usize);
        impl<N, E> DfsVisitor<N, E> for BackEdges {
            fn back_edge(&mut self, _edge: &E) -> ControlFlow<()> {
                self.0 += 1;
                ControlFlow::Continue(())
            }
        }

        let graph = BasicGraph::from_rows(&[&["a", "a"][..]]);
        let mut visitor = BackEdges(0);
        let _ = dfs(&graph, &mut visitor);
        assert_eq!(visitor.0, 1);
    }
}
