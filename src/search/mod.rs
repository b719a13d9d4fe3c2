//! Timed search templates: depth-first and breadth-first search.
//!
//! Both searches are driven by one engine (`timed`) that owns the per-search
//! state (a node-to-mark table and an event dispenser) and differ only in
//! dispenser discipline (stack for DFS, queue for BFS) and in how node and
//! edge events are interpreted. Callers supply a visitor
//! ([`DfsVisitor`]/[`BfsVisitor`]) whose hooks default to no-ops, overriding
//! only the events they care about.
//!
//! Searches are strictly single-threaded and run to completion
//! synchronously; the only way to stop one early is to return
//! `ControlFlow::Break` from a hook, which aborts the whole call.

mod bfs;
mod dfs;
mod dispenser;
mod timed;

pub use bfs::{bfs, bfs_from, bfs_from_root, BfsVisitor};
pub use dfs::{dfs, dfs_from, dfs_from_root, DfsVisitor};
