//! Undirected graph over an arena of nodes
//!
//! - `node`: the `Node` vertex type and its `NodeId` arena handle
//! - `traversal`: provider trait decoupling algorithms from storage
//! - `algos`: depth-first and breadth-first traversal
//!
//! Nodes live in an arena owned by the graph and are addressed by `NodeId`;
//! adjacency sets hold ids, not references, so removing a vertex is an
//! explicit clearing of back-references rather than a dangling-pointer
//! hazard. Graph membership (`nodes`) is tracked separately from arena
//! residence: edges may be created between any arena nodes, members or not.

pub mod algos;
pub mod node;
pub mod traversal;

pub use algos::{bfs_traverse, dfs_traverse};
pub use node::{Node, NodeId};
pub use traversal::AdjacencyProvider;

use crate::error::{GraphError, Result};
use std::collections::BTreeSet;
use std::hash::Hash;

/// An undirected graph: a node arena plus a vertex membership set.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    arena: Vec<Node<V>>,
    nodes: BTreeSet<NodeId>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Graph {
            arena: Vec::new(),
            nodes: BTreeSet::new(),
        }
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.index() < self.arena.len() {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound { id })
        }
    }

    /// Register a node in the arena and return its handle.
    ///
    /// Registration alone does not make the node a vertex of the graph; see
    /// [`add_vertex`](Graph::add_vertex). A pre-populated adjacency set may
    /// only name nodes already in the arena.
    pub fn insert(&mut self, node: Node<V>) -> Result<NodeId> {
        for &neighbor in &node.adjacent {
            if neighbor.index() >= self.arena.len() {
                return Err(GraphError::DanglingAdjacency { id: neighbor });
            }
        }
        let id = NodeId::new(self.arena.len());
        self.arena.push(node);
        Ok(id)
    }

    /// Add a single vertex to the graph's node set. Idempotent.
    pub fn add_vertex(&mut self, id: NodeId) -> Result<()> {
        self.check(id)?;
        self.nodes.insert(id);
        Ok(())
    }

    /// Add each vertex in the given sequence, in order.
    pub fn add_vertices(&mut self, ids: impl IntoIterator<Item = NodeId>) -> Result<()> {
        for id in ids {
            self.add_vertex(id)?;
        }
        Ok(())
    }

    /// Add an undirected edge: each endpoint gains the other as a neighbor.
    ///
    /// Idempotent. Does not require either endpoint to be a member of the
    /// graph's node set. A self-loop inserts the node into its own adjacency
    /// set once.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<()> {
        self.check(v1)?;
        self.check(v2)?;
        self.arena[v1.index()].adjacent.insert(v2);
        self.arena[v2.index()].adjacent.insert(v1);
        Ok(())
    }

    /// Remove an undirected edge from both adjacency sets.
    ///
    /// Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<()> {
        self.check(v1)?;
        self.check(v2)?;
        self.arena[v1.index()].adjacent.remove(&v2);
        self.arena[v2.index()].adjacent.remove(&v1);
        Ok(())
    }

    /// Remove a vertex from the node set and clear every back-reference to
    /// it from its neighbors' adjacency sets.
    ///
    /// The node itself stays in the arena with its adjacency set intact, so
    /// the caller's handle remains valid and the vertex may be re-added.
    /// Removing a non-member is a no-op apart from the back-reference sweep.
    pub fn remove_vertex(&mut self, id: NodeId) -> Result<()> {
        self.check(id)?;
        self.nodes.remove(&id);
        let neighbors: Vec<NodeId> = self.arena[id.index()].adjacent.iter().copied().collect();
        for neighbor in neighbors {
            self.arena[neighbor.index()].adjacent.remove(&id);
        }
        tracing::debug!(vertex = %id, "removed vertex");
        Ok(())
    }

    /// Whether the given node is a member of the graph's node set.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Number of member vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Member vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn value(&self, id: NodeId) -> Result<&V> {
        self.check(id)?;
        Ok(self.arena[id.index()].value())
    }

    /// A node's neighbors in ascending id order.
    pub fn neighbors(&self, id: NodeId) -> Result<&BTreeSet<NodeId>> {
        self.check(id)?;
        Ok(&self.arena[id.index()].adjacent)
    }

    pub fn degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.neighbors(id)?.len())
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Depth-first traversal from `start`; see [`algos::dfs_traverse`].
    pub fn depth_first_search(&self, start: NodeId) -> Result<Vec<V>> {
        dfs_traverse(self, start)
    }

    /// Breadth-first traversal from `start`; see [`algos::bfs_traverse`].
    pub fn breadth_first_search(&self, start: NodeId) -> Result<Vec<V>> {
        bfs_traverse(self, start)
    }
}
