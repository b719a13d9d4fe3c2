use thiserror::Error;

/// The error type for fallible operations in this library.
///
/// The engine itself is purely computational: there are no recoverable or
/// retryable failures, and anything that goes wrong is a programming error
/// (a malformed graph or a violated precondition). The only operations that
/// surface an error value rather than a panic are the ones that validate a
/// whole graph up front, such as [`Checked::new`](crate::graph::Checked::new).
#[derive(Error, Debug)]
pub enum Error {
    /// A graph failed contract validation.
    ///
    /// Produced when the adjacency-list invariant does not hold: an edge
    /// listed under a node whose source is a different node, an edge whose
    /// target is not a node of the graph, or reverse adjacency that is
    /// inconsistent with the forward adjacency.
    #[error("graph contract violated: {0}")]
    Contract(String),
}

/// Convenience alias for `std::result::Result<T, graphwalk::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
