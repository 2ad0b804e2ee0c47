//! Error types for tangle
//!
//! Every operation that dereferences a `NodeId` returns `Result`; handles
//! minted by one graph are representable but meaningless in another, so the
//! lookup failure is a typed error rather than a panic.

use crate::graph::NodeId;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("adjacency entry references a node not in the graph: {id}")]
    DanglingAdjacency { id: NodeId },
}

pub type Result<T> = std::result::Result<T, GraphError>;
