//! Graph algorithm implementations
//!
//! Stateless functions over a graph reference:
//! - `bfs`: layered breadth-first traversal
//! - `dfs`: depth-first traversal with edge classification and cycle detection
//! - `dijkstra`: shortest paths under non-negative weights
//! - `bellman_ford`: shortest paths with negative-cycle detection
//! - `shared`: utilities used by multiple algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bellman_ford::{bellman_ford, bellman_ford_path};
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;

#[cfg(test)]
pub(crate) mod testutil;
