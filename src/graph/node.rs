use std::collections::BTreeSet;
use std::fmt;

/// Handle to a node in a graph's arena.
///
/// Ids are assigned sequentially at insertion and never reused, so ascending
/// id order is node-creation order. A `NodeId` is only meaningful to the
/// graph that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled vertex: an opaque value plus a set of neighbor handles.
///
/// Adjacency symmetry is maintained by [`Graph`](crate::graph::Graph) edge
/// operations, not by `Node` itself — an adjacency set pre-populated via
/// [`with_adjacent`](Node::with_adjacent) is one-sided until `add_edge`
/// links the nodes.
#[derive(Debug, Clone)]
pub struct Node<V> {
    value: V,
    pub(crate) adjacent: BTreeSet<NodeId>,
}

impl<V> Node<V> {
    /// Create a node with an empty adjacency set.
    pub fn new(value: V) -> Self {
        Node {
            value,
            adjacent: BTreeSet::new(),
        }
    }

    /// Create a node with a pre-populated adjacency set.
    pub fn with_adjacent(value: V, adjacent: BTreeSet<NodeId>) -> Self {
        Node { value, adjacent }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn adjacent(&self) -> &BTreeSet<NodeId> {
        &self.adjacent
    }
}
