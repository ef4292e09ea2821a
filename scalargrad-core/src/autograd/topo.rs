use crate::node::{Node, NodeId};
use crate::value::Value;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Depth-first, post-order: a node is appended only after all of its operands. Each
/// node is visited at most once, so shared operands (diamonds, `a + a`) appear a single
/// time. The traversal keeps an explicit stack and does not recurse, so arbitrarily
/// deep chains are fine.
pub(crate) fn build_topo(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    // (node, operands already pushed)
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));
        // Reversed so the first operand is explored first.
        for operand in nodes[id.index()].op.operands().into_iter().rev() {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }

    log::debug!("build_topo: {} nodes reachable from {}", sorted.len(), root);
    sorted
}

/// Returns every node reachable from `root` (including `root`, which comes last), each
/// positioned after all of its operands.
pub fn topological_order<'g>(root: &Value<'g>) -> Vec<Value<'g>> {
    let graph = root.graph();
    let order = build_topo(&graph.borrow_nodes(), root.id());
    order
        .into_iter()
        .map(|id| Value::new(graph, id))
        .collect()
}

#[cfg(test)]
#[path = "topo_test.rs"]
mod tests;
