//! The shared timed search engine behind DFS and BFS.
//!
//! Depth-first and breadth-first search are the same algorithm parameterized
//! two ways: the dispenser discipline (stack or queue) and the
//! interpretation of node/edge events. This module owns what is common (the
//! per-search mark table, the event dispenser, the stamp counter and the
//! drive loop) while [`dfs`](crate::search::dfs) and
//! [`bfs`](crate::search::bfs) supply the event interpretation.
//!
//! All state here is owned exclusively by one `search` invocation: it is
//! created when the search starts, mutated only by the engine, and dropped
//! when the invocation returns. Nothing is shared or reused across calls.

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::graph::Graph;
use crate::search::dispenser::{Discipline, Dispenser};

/// Per-node search status.
///
/// Lifecycle per node: `Unseen` → `Pending` (scheduled but not yet
/// discovered) → `Discovered(stamp)` → `Finished(stamp)`. DFS stamps
/// discovery and finish from one shared counter; BFS does not use stamps.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Mark {
    Unseen,
    Pending,
    Discovered(u32),
    Finished(u32),
}

/// A unit of work in the dispenser: either a node event (first pop =
/// discovery, second pop = finish) or an edge event awaiting
/// classification.
#[derive(Clone, Debug)]
pub(crate) enum Event<N, E> {
    Node(N),
    Edge(E),
}

/// Mutable state owned by a single search invocation.
pub(crate) struct SearchState<G: Graph> {
    marks: HashMap<G::Node, Mark>,
    pub(crate) agenda: Dispenser<Event<G::Node, G::Edge>>,
    stamps: u32,
}

impl<G: Graph> SearchState<G> {
    fn new(discipline: Discipline) -> Self {
        SearchState {
            marks: HashMap::new(),
            agenda: Dispenser::new(discipline),
            stamps: 0,
        }
    }

    pub(crate) fn mark(&self, node: &G::Node) -> Mark {
        self.marks[node]
    }

    pub(crate) fn set_mark(&mut self, node: &G::Node, mark: Mark) {
        self.marks.insert(node.clone(), mark);
    }

    /// The next value of the shared discovery/finish counter.
    pub(crate) fn next_stamp(&mut self) -> u32 {
        self.stamps += 1;
        self.stamps
    }
}

/// Event interpretation supplied by a search template.
pub(crate) trait TimedSearch<G: Graph> {
    /// Called once for each node before the search.
    fn prepare_node(&mut self, node: &G::Node) -> ControlFlow<()>;

    /// Called once for each root drawn from the root sequence that has not
    /// already been done. Responsible for marking the root `Pending`.
    fn begin_root(&mut self, state: &mut SearchState<G>, root: &G::Node) -> ControlFlow<()>;

    /// Called once for each begun root after all events generated from it
    /// have been handled.
    fn end_root(&mut self, root: &G::Node) -> ControlFlow<()>;

    /// Called once for each node event drawn from the dispenser.
    fn handle_node(
        &mut self,
        state: &mut SearchState<G>,
        graph: &G,
        node: &G::Node,
    ) -> ControlFlow<()>;

    /// Called once for each edge event drawn from the dispenser.
    fn handle_edge(
        &mut self,
        state: &mut SearchState<G>,
        graph: &G,
        edge: &G::Edge,
    ) -> ControlFlow<()>;
}

/// Runs a timed search to completion, synchronously.
///
/// A `Break` returned by any hook aborts the whole call and is propagated
/// to the caller; the engine never swallows it.
pub(crate) fn drive<G, S>(
    graph: &G,
    roots: &[G::Node],
    discipline: Discipline,
    search: &mut S,
) -> ControlFlow<()>
where
    G: Graph,
    S: TimedSearch<G>,
{
    debug_assert!(!graph.nodes().is_empty(), "searched graph has no nodes");
    debug_assert!(!roots.is_empty(), "search root sequence is empty");

    let mut state = SearchState::new(discipline);
    debug_assert!(state.agenda.is_empty());
    for node in graph.nodes() {
        state.set_mark(node, Mark::Unseen);
        search.prepare_node(node)?;
    }

    for root in roots {
        if state.mark(root) != Mark::Unseen {
            continue;
        }
        search.begin_root(&mut state, root)?;
        search.handle_node(&mut state, graph, root)?;
        while let Some(event) = state.agenda.pop() {
            match event {
                Event::Node(node) => search.handle_node(&mut state, graph, &node)?,
                Event::Edge(edge) => search.handle_edge(&mut state, graph, &edge)?,
            }
        }
        search.end_root(root)?;
    }

    ControlFlow::Continue(())
}
