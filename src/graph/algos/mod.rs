//! Graph traversal implementations
//!
//! Contains the two traversal algorithms, generic over
//! [`AdjacencyProvider`](crate::graph::AdjacencyProvider):
//! - `dfs`: stack-based depth-first traversal
//! - `bfs`: queue-based breadth-first traversal

pub mod bfs;
pub mod dfs;

pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
