use crate::error::Result;
use crate::graph::{Graph, NodeId};
use std::collections::BTreeSet;

/// Trait for providing node adjacency and values to traversal algorithms
pub trait AdjacencyProvider<V> {
    fn adjacent(&self, id: NodeId) -> Result<&BTreeSet<NodeId>>;
    fn value(&self, id: NodeId) -> Result<&V>;
}

impl<V> AdjacencyProvider<V> for Graph<V> {
    fn adjacent(&self, id: NodeId) -> Result<&BTreeSet<NodeId>> {
        self.neighbors(id)
    }

    fn value(&self, id: NodeId) -> Result<&V> {
        self.value(id)
    }
}
