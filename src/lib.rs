#![deny(missing_docs)]

//! # graphwalk
//!
//! Adjacency-list graph views and timed search templates for directed
//! multigraphs.
//!
//! `graphwalk` assumes you already have some representation of graphs. You
//! implement the small [`Graph`] contract as an adapter over it - nodes and
//! edges are opaque values the library only compares and hashes - and every
//! view and algorithm here works on top of that contract without copying
//! your data.
//!
//! ## Features
//!
//! - **Adjacency-list contract** - [`Graph`] and [`AugmentedGraph`], with
//!   [`BasicGraph`] as a ready-made implementation for when you'd rather not
//!   write an adapter.
//! - **Structural views** - transposition, undirected projection,
//!   reverse-adjacency augmentation and subgraph restriction, each computed
//!   once at construction and sharing the underlying identities.
//! - **Search templates** - depth-first and breadth-first search as one
//!   timed engine with pluggable visitors: override only the event hooks you
//!   need, abort early by returning `ControlFlow::Break`.
//! - **Derived algorithms** - connected components, Kosaraju's strongly
//!   connected components, transitive irreflexive closure, finish-time
//!   orderings, cycle detection and deterministic diagnostic rendering.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graphwalk::prelude::*;
//!
//! let graph = BasicGraph::from_rows(&[
//!     &["socks", "shoes"][..],
//!     &["pants", "shoes", "belt"][..],
//!     &["shoes"][..],
//!     &["belt"][..],
//! ]);
//!
//! assert!(algorithms::is_acyclic(&graph));
//! for component in algorithms::connected_components(&graph) {
//!     println!("{}", algorithms::as_string(&component));
//! }
//! ```
//!
//! ## Determinism
//!
//! The iteration order of [`Graph::nodes`] and [`Graph::edges_from`] is part
//! of the observable contract: it decides tie-breaks in every derived
//! algorithm, down to the exact bytes of
//! [`algorithms::as_string`]. The library never iterates hash containers to
//! produce output. If you need reproducible results across runs, your node
//! and edge types must hash and compare deterministically across runs too;
//! that obligation is yours, not the engine's.
//!
//! ## Concurrency
//!
//! There is none. Graphs are immutable snapshots, searches run to
//! completion synchronously on the calling thread, and adapters assume the
//! underlying graph is frozen for their whole lifetime.

pub mod algorithms;
pub(crate) mod error;
pub mod graph;
pub mod search;

#[cfg(test)]
pub(crate) mod test;

pub use error::{Error, Result};
pub use graph::{
    Augmented, AugmentedGraph, BasicEdge, BasicGraph, Checked, Graph, Subgraph, Transposed,
    Undirected, UndirectedEdge,
};
pub use search::{bfs, bfs_from, bfs_from_root, dfs, dfs_from, dfs_from_root, BfsVisitor, DfsVisitor};

/// Convenient re-exports of the most commonly used items.
///
/// ```rust,ignore
/// use graphwalk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms;
    pub use crate::graph::{
        Augmented, AugmentedGraph, BasicEdge, BasicGraph, Checked, Graph, Subgraph, Transposed,
        Undirected, UndirectedEdge,
    };
    pub use crate::search::{
        bfs, bfs_from, bfs_from_root, dfs, dfs_from, dfs_from_root, BfsVisitor, DfsVisitor,
    };
    pub use crate::{Error, Result};
}
