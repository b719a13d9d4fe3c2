//! Graph contracts, a concrete implementation, and structural adapters.
//!
//! This module is the foundation of the crate:
//!
//! - **Contracts**: [`Graph`] and [`AugmentedGraph`] define the read-only
//!   adjacency-list view every algorithm is written against.
//! - **Concrete graph**: [`BasicGraph`] with its manufactured
//!   [`BasicEdge`] identities, buildable incrementally or from an
//!   association-table representation.
//! - **Adapters**: [`Augmented`] (reverse adjacency), [`Transposed`]
//!   (accessor-swapping view), [`Undirected`] (synthesized reverse edges)
//!   and [`Subgraph`] (node/edge restriction). Adapters are computed once at
//!   construction and never mutated; they borrow the underlying graph's node
//!   and edge identities rather than copying them.
//! - **Contract checking**: [`Checked`] validates the graph invariant at
//!   construction and preconditions per call.

mod augmented;
mod basic;
mod checked;
mod subgraph;
mod traits;
mod transposed;
mod undirected;

pub use augmented::Augmented;
pub use basic::{BasicEdge, BasicGraph};
pub use checked::Checked;
pub use subgraph::Subgraph;
pub use traits::{AugmentedGraph, Graph};
pub use transposed::Transposed;
pub use undirected::{Undirected, UndirectedEdge};
