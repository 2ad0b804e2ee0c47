use crate::error::Result;
use crate::graph::traversal::AdjacencyProvider;
use crate::graph::NodeId;
use std::collections::HashSet;
use std::hash::Hash;

/// Perform depth-first traversal from a start node.
///
/// Explores with an explicit stack: pop the top node, mark its value
/// visited, then push every neighbor whose value is still unvisited.
/// Neighbors are pushed in descending id order so the lowest-id neighbor is
/// expanded first, making the output deterministic. Returns values in the
/// order they were first marked.
///
/// Visited-tracking is by value equality, not node identity: two distinct
/// nodes sharing a value are treated as one visited entity. Callers that
/// need identity semantics should keep values unique per node.
///
/// A node can sit on the stack more than once before its first pop (pushes
/// check the visited set, not the stack); later pops mark an already-visited
/// value, which is a no-op.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs_traverse<V, P>(provider: &P, start: NodeId) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash,
    P: AdjacencyProvider<V>,
{
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        let value = provider.value(current)?;
        if visited.insert(value.clone()) {
            order.push(value.clone());
        }
        for &neighbor in provider.adjacent(current)?.iter().rev() {
            if !visited.contains(provider.value(neighbor)?) {
                stack.push(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    Ok(order)
}
