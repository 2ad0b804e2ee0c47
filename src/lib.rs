//! Tangle
//!
//! An in-memory undirected graph: labeled vertices in an arena, symmetric
//! edges, and stack/queue based traversals (DFS and BFS).

pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{Graph, Node, NodeId};
