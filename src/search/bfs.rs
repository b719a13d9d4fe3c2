//! Breadth-first search template.

use std::ops::ControlFlow;

use crate::graph::Graph;
use crate::search::dispenser::Discipline;
use crate::search::timed::{drive, Event, Mark, SearchState, TimedSearch};

/// Event hooks for [`bfs`] and its variants.
///
/// Every hook defaults to a no-op returning `ControlFlow::Continue(())`;
/// returning `Break` from any hook aborts the whole search call.
///
/// Unlike depth-first search, breadth-first search only distinguishes tree
/// edges from non-tree edges: finer classification is not meaningful in
/// level order.
///
/// # Examples
///
/// Computing an inverted BFS tree (node → parent), the building block of
/// shortest paths in unweighted graphs:
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use std::ops::ControlFlow;
/// use graphwalk::{bfs_from_root, BasicGraph, BfsVisitor, Graph};
///
/// struct Parents<'g, G: Graph> {
///     graph: &'g G,
///     parent: HashMap<G::Node, G::Node>,
/// }
///
/// impl<'g, G: Graph> BfsVisitor<G::Node, G::Edge> for Parents<'g, G> {
///     fn tree_edge(&mut self, edge: &G::Edge) -> ControlFlow<()> {
///         self.parent.insert(
///             self.graph.target_of(edge).clone(),
///             self.graph.source_of(edge).clone(),
///         );
///         ControlFlow::Continue(())
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait BfsVisitor<N, E> {
    /// Called once for each node before the search.
    fn init_node(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each node that is first encountered from the root
    /// sequence.
    fn discover_root(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each discovered root after the entire search tree
    /// rooted at it has been examined.
    fn finish_root(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each discovered node, after all edges in the
    /// previous level have been examined but before any edge of the current
    /// level is.
    fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each node after all its edges have been examined but
    /// before any node on the next level is.
    fn finish_node(&mut self, node: &N) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each search-tree edge.
    fn tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once for each edge that is not part of the search tree.
    fn non_tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

struct BfsDriver<'v, V> {
    visitor: &'v mut V,
}

impl<G, V> TimedSearch<G> for BfsDriver<'_, V>
where
    G: Graph,
    V: BfsVisitor<G::Node, G::Edge>,
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
            state.set_mark(node, Mark::Discovered(0));
            self.visitor.discover_node(node)?;
            // Edges first, finish marker last: with FIFO order the node
            // finishes after its own edges but before the next level.
            for edge in graph.edges_from(node) {
                state.agenda.push(Event::Edge(edge.clone()));
            }
            state.agenda.push(Event::Node(node.clone()));
            ControlFlow::Continue(())
        } else {
            state.set_mark(node, Mark::Finished(0));
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
        if state.mark(target) == Mark::Unseen {
            state.set_mark(target, Mark::Pending);
            self.visitor.tree_edge(edge)?;
            state.agenda.push(Event::Node(target.clone()));
            ControlFlow::Continue(())
        } else {
            self.visitor.non_tree_edge(edge)
        }
    }
}

/// Performs breadth-first search over the whole graph, examining roots in
/// `nodes()` order, and calls the visitor's event hooks.
///
/// Returns the `ControlFlow` propagated from the visitor: `Break` if some
/// hook aborted the search, `Continue` otherwise.
pub fn bfs<G, V>(graph: &G, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: BfsVisitor<G::Node, G::Edge>,
{
    bfs_from(graph, graph.nodes(), visitor)
}

/// Performs breadth-first search examining roots in the given order.
///
/// Roots already reached from an earlier root are skipped.
pub fn bfs_from<G, V>(graph: &G, roots: &[G::Node], visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: BfsVisitor<G::Node, G::Edge>,
{
    drive(graph, roots, Discipline::Fifo, &mut BfsDriver { visitor })
}

/// Performs breadth-first search from a single root.
pub fn bfs_from_root<G, V>(graph: &G, root: &G::Node, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: BfsVisitor<G::Node, G::Edge>,
{
    bfs_from(graph, std::slice::from_ref(root), visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::BasicGraph;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl<N: std::fmt::Display, E> BfsVisitor<N, E> for Recorder {
        fn discover_node(&mut self, node: &N) -> ControlFlow<()> {
            self.events.push(format!("d({node})"));
            ControlFlow::Continue(())
        }

        fn finish_node(&mut self, node: &N) -> ControlFlow<()> {
            self.events.push(format!("f({node})"));
            ControlFlow::Continue(())
        }
    }

    fn diamond() -> BasicGraph<&'static str> {
        BasicGraph::from_rows(&[
            &["a", "b", "c"][..],
            &["b", "d"][..],
            &["c", "d"][..],
            &["d"][..],
        ])
    }

    #[test]
    fn test_level_order() {
        let mut recorder = Recorder::default();
        let _ = bfs(&diamond(), &mut recorder);

        assert_eq!(
            recorder.events,
            vec!["d(a)", "f(a)", "d(b)", "d(c)", "f(b)", "f(c)", "d(d)", "f(d)"]
        );
    }

    #[test]
    fn test_tree_and_non_tree_edges() {
        #[derive(Default)]
        struct EdgeCounts {
            tree: usize,
            non_tree: usize,
        }
        impl<N, E> BfsVisitor<N, E> for EdgeCounts {
            fn tree_edge(&mut self, _edge: &E) -> ControlFlow<()> {
                self.tree += 1;
                ControlFlow::Continue(())
            }
            fn non_tree_edge(&mut self, _edge: &E) -> ControlFlow<()> {
                self.non_tree += 1;
                ControlFlow::Continue(())
            }
        }

        let mut counts = EdgeCounts::default();
        let _ = bfs(&diamond(), &mut counts);

        // Three tree edges reach b, c, d; the second edge into d is non-tree.
        assert_eq!(counts.tree, 3);
        assert_eq!(counts.non_tree, 1);
    }

    #[test]
    fn test_single_root() {
        let graph = BasicGraph::from_rows(&[&["a", "b"][..], &["b"][..], &["c"][..]]);
        let mut recorder = Recorder::default();
        let _ = bfs_from_root(&graph, &"a", &mut recorder);

        assert_eq!(recorder.events, vec!["d(a)", "f(a)", "d(b)", "f(b)"]);
    }

    #[test]
    fn test_break_aborts_search() {
        struct StopAtFirst;
        impl<N, E> BfsVisitor<N, E> for StopAtFirst {
            fn discover_node(&mut self, _node: &N) -> ControlFlow<()> {
                ControlFlow::Break(())
            }
        }

        let flow = bfs(&diamond(), &mut StopAtFirst);
        assert!(flow.is_break());
    }
}
