//! Trait definitions for the adjacency-list graph abstraction.
//!
//! This module defines the contracts that every graph view in this library
//! implements. Algorithms are written against these traits, so they work
//! unchanged over concrete graphs ([`BasicGraph`](crate::graph::BasicGraph)),
//! structural adapters ([`Transposed`](crate::graph::Transposed),
//! [`Undirected`](crate::graph::Undirected)) and derived graphs
//! ([`Subgraph`](crate::graph::Subgraph),
//! [`Closure`](crate::algorithms::Closure)).
//!
//! # Design Principles
//!
//! ## Opaque Identities
//!
//! Nodes and edges are opaque caller-supplied values. The engine never
//! interprets them beyond equality and hashing; a graph owns only the
//! adjacency structure relating them. The basic assumption is that a client
//! already has some representation of graphs and implements [`Graph`] as an
//! adapter over it, rather than converting into a library-owned node type.
//!
//! ## Slice-Based Adjacency
//!
//! `nodes` and `edges_from` return slices of pre-built lists. Implementations
//! must not construct the lists per call: every derived algorithm assumes
//! O(1) access, and an implementation backed by per-call scans silently
//! degrades the complexity class of everything built on top.
//!
//! ## Order Is Observable
//!
//! The iteration order of `nodes` and `edges_from` is part of the contract.
//! It decides which component comes first, which SCC is emitted first, and
//! the exact output of [`as_string`](crate::algorithms::as_string).

use std::hash::Hash;

/// Abstract, adjacency-list style representation of a finite directed
/// multigraph.
///
/// Multiple edges between the same pair of nodes and self edges are
/// permitted; each logical edge must be a distinct identity even when its
/// endpoints coincide with another edge's.
///
/// Graphs are treated as immutable snapshots: adapters and searches assume
/// the underlying graph does not change for their entire lifetime.
///
/// # Caller Obligations
///
/// Node and edge values must have deterministic, run-stable `Hash` and `Eq`
/// implementations if reproducible results are needed across runs. The
/// library never iterates hash containers to produce output, but it does key
/// per-search state by node value.
///
/// # Failure Semantics
///
/// Calling an accessor with a node or edge that does not belong to the graph
/// is undefined for plain implementations; most will panic. The
/// [`Checked`](crate::graph::Checked) decorator turns such calls into
/// fail-fast panics with a descriptive message.
///
/// # Examples
///
/// ```rust,ignore
/// use graphwalk::{BasicGraph, Graph};
///
/// let mut graph = BasicGraph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
///
/// for node in graph.nodes() {
///     for edge in graph.edges_from(node) {
///         assert_eq!(graph.source_of(edge), node);
///     }
/// }
/// ```
pub trait Graph {
    /// Opaque node identity.
    type Node: Clone + Eq + Hash;
    /// Opaque edge identity.
    type Edge: Clone + Eq + Hash;

    /// All nodes of the graph, in an order that is stable and observable.
    ///
    /// O(1): returns a pre-built list.
    fn nodes(&self) -> &[Self::Node];

    /// All edges whose source is `node`, in an order that is stable and
    /// observable.
    ///
    /// O(1): returns a pre-built list.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a node of this graph.
    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge];

    /// The source node of `edge`. O(1).
    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node;

    /// The target node of `edge`. O(1).
    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node;
}

/// A graph that additionally answers reverse-adjacency queries in O(1).
///
/// An augmented graph allows accessing edges from their target nodes, which
/// lets algorithms that would otherwise have to compute the transpose first
/// (in O(N+E) time) skip that step. Clients usually do not implement this
/// trait themselves: [`Augmented`](crate::graph::Augmented) computes the
/// reverse adjacency for any [`Graph`] in one pass, and a graph that is
/// already augmented is simply used as-is.
pub trait AugmentedGraph: Graph {
    /// All edges whose target is `node`, in an order that is stable and
    /// observable.
    ///
    /// O(1): returns a pre-built list.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a node of this graph.
    fn edges_to(&self, node: &Self::Node) -> &[Self::Edge];

    /// True if and only if `node` is a node of this graph.
    fn is_node(&self, node: &Self::Node) -> bool;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;
    type Edge = G::Edge;

    fn nodes(&self) -> &[Self::Node] {
        (**self).nodes()
    }

    fn edges_from(&self, node: &Self::Node) -> &[Self::Edge] {
        (**self).edges_from(node)
    }

    fn source_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        (**self).source_of(edge)
    }

    fn target_of<'a>(&'a self, edge: &'a Self::Edge) -> &'a Self::Node {
        (**self).target_of(edge)
    }
}

impl<G: AugmentedGraph + ?Sized> AugmentedGraph for &G {
    fn edges_to(&self, node: &Self::Node) -> &[Self::Edge] {
        (**self).edges_to(node)
    }

    fn is_node(&self, node: &Self::Node) -> bool {
        (**self).is_node(node)
    }
}
