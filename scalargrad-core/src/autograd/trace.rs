use crate::value::Value;
use std::collections::HashSet;

/// Collects every node reachable from `root` and every `(operand, consumer)` edge.
///
/// A diagnostic helper for renderers; the engine never calls it.
pub fn trace<'g>(root: &Value<'g>) -> (HashSet<Value<'g>>, HashSet<(Value<'g>, Value<'g>)>) {
    let mut nodes = HashSet::new();
    let mut edges = HashSet::new();
    let mut pending = vec![*root];

    while let Some(value) = pending.pop() {
        if !nodes.insert(value) {
            continue;
        }
        for operand in value.operands() {
            edges.insert((operand, value));
            pending.push(operand);
        }
    }
    (nodes, edges)
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod tests;
