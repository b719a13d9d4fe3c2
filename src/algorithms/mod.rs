//! Graph algorithms built on the search templates.
//!
//! Everything here is a free function over the [`Graph`](crate::graph::Graph)
//! contract (or [`AugmentedGraph`](crate::graph::AugmentedGraph) where
//! reverse adjacency is required):
//!
//! # Components
//!
//! - [`connected_components`] - undirected reachability classes
//! - [`strongly_connected_components`] - Kosaraju's two-pass algorithm
//!
//! # Closure and orderings
//!
//! - [`transitive_irreflexive_closure`] - reachability edges per root
//! - [`nodes_by_decreasing_dfs_finish`] - finish-time order (topological on
//!   DAGs)
//! - [`nodes_by_increasing_outdegree`] / [`nodes_by_increasing_indegree`]
//! - [`nodes_reachable_from`] / [`nodes_reachable_from_root`]
//! - [`is_acyclic`] - back-edge based cycle detection
//!
//! # Inspection and diagnostics
//!
//! - [`edges`], [`edge_set`], [`node_set`], [`same_nodes_and_edges`]
//! - [`invariant`], [`augmented_invariant`] - contract checks
//! - [`is_self`], [`is_incoming`], [`other_node`]
//! - [`as_string`], [`as_string_with`] - deterministic textual rendering
//!
//! Every ordered result follows `nodes()`/`edges_from()` order; nothing here
//! depends on hash iteration order.

mod closure;
mod components;
mod inspect;
mod order;
mod render;

pub use closure::{transitive_irreflexive_closure, Closure};
pub use components::{connected_components, strongly_connected_components};
pub use inspect::{
    augmented_invariant, edge_set, edges, invariant, is_incoming, is_self, node_set, other_node,
    same_nodes_and_edges,
};
pub use order::{
    is_acyclic, nodes_by_decreasing_dfs_finish, nodes_by_increasing_indegree,
    nodes_by_increasing_outdegree, nodes_reachable_from, nodes_reachable_from_root,
};
pub use render::{as_string, as_string_with};
