use crate::error::Result;
use crate::graph::traversal::AdjacencyProvider;
use crate::graph::NodeId;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Perform breadth-first traversal from a start node.
///
/// Explores with a queue of node ids: mark the start value visited and
/// enqueue the start node, then repeatedly dequeue a node and, for each
/// neighbor whose value is still unvisited, mark it and enqueue it.
/// Neighbors are scanned in ascending id order. Returns values in discovery
/// order, so all nodes at distance `d` from the start appear before any node
/// at distance `d + 1`.
///
/// Visited-tracking is by value equality, not node identity: two distinct
/// nodes sharing a value are treated as one visited entity. Callers that
/// need identity semantics should keep values unique per node.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_traverse<V, P>(provider: &P, start: NodeId) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash,
    P: AdjacencyProvider<V>,
{
    let start_value = provider.value(start)?;
    let mut order = vec![start_value.clone()];
    let mut visited = HashSet::new();
    visited.insert(start_value.clone());

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &neighbor in provider.adjacent(current)? {
            let value = provider.value(neighbor)?;
            if !visited.contains(value) {
                visited.insert(value.clone());
                order.push(value.clone());
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, Node};

    /// Test that bfs_traverse visits in distance layers
    #[test]
    fn test_bfs_traverse_layers() {
        let mut graph = Graph::new();
        let root = graph.insert(Node::new("root")).unwrap();
        let left = graph.insert(Node::new("left")).unwrap();
        let right = graph.insert(Node::new("right")).unwrap();
        let leaf = graph.insert(Node::new("leaf")).unwrap();
        graph.add_vertices([root, left, right, leaf]).unwrap();
        graph.add_edge(root, left).unwrap();
        graph.add_edge(root, right).unwrap();
        graph.add_edge(left, leaf).unwrap();

        assert_eq!(
            bfs_traverse(&graph, root).unwrap(),
            vec!["root", "left", "right", "leaf"]
        );
    }

    #[test]
    fn test_bfs_traverse_isolated_start() {
        let mut graph = Graph::new();
        let a = graph.insert(Node::new("a")).unwrap();
        graph.add_vertex(a).unwrap();
        assert_eq!(bfs_traverse(&graph, a).unwrap(), vec!["a"]);
    }

    /// Test that a cycle terminates
    #[test]
    fn test_bfs_traverse_cycle() {
        let mut graph = Graph::new();
        let a = graph.insert(Node::new("a")).unwrap();
        let b = graph.insert(Node::new("b")).unwrap();
        let c = graph.insert(Node::new("c")).unwrap();
        graph.add_vertices([a, b, c]).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(c, a).unwrap();

        assert_eq!(bfs_traverse(&graph, a).unwrap(), vec!["a", "b", "c"]);
    }

    /// Test that a self-loop terminates and yields a single entry
    #[test]
    fn test_bfs_traverse_self_loop() {
        let mut graph = Graph::new();
        let a = graph.insert(Node::new("a")).unwrap();
        graph.add_vertex(a).unwrap();
        graph.add_edge(a, a).unwrap();
        assert_eq!(bfs_traverse(&graph, a).unwrap(), vec!["a"]);
    }

    /// Test that value-equal nodes are merged by the visited set
    #[test]
    fn test_bfs_traverse_merges_duplicate_values() {
        let mut graph = Graph::new();
        let a = graph.insert(Node::new("a")).unwrap();
        let b1 = graph.insert(Node::new("b")).unwrap();
        let b2 = graph.insert(Node::new("b")).unwrap();
        graph.add_vertices([a, b1, b2]).unwrap();
        graph.add_edge(a, b1).unwrap();
        graph.add_edge(a, b2).unwrap();

        assert_eq!(bfs_traverse(&graph, a).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_bfs_traverse_unknown_start_errors() {
        let graph: Graph<&str> = Graph::new();
        assert!(bfs_traverse(&graph, crate::graph::NodeId::new(0)).is_err());
    }

    /// Test that traversal reaches nodes linked by edges outside the
    /// membership set
    #[test]
    fn test_bfs_traverse_ignores_membership() {
        let mut graph = Graph::new();
        let a = graph.insert(Node::new("a")).unwrap();
        let b = graph.insert(Node::new("b")).unwrap();
        graph.add_vertex(a).unwrap();
        // b is never added as a vertex, but the edge still links it
        graph.add_edge(a, b).unwrap();

        assert_eq!(bfs_traverse(&graph, a).unwrap(), vec!["a", "b"]);
    }
}
