// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::{with_promoted, Operand};
use crate::value::Value;

/// Adds two operands: `a + b`.
///
/// Raw numbers are promoted to leaves of the graph owning the other operand.
///
/// # Errors
/// * [`ScalarGradError::InvalidOperand`] if neither operand is a node, or the nodes come
///   from different graphs.
/// * [`ScalarGradError::DomainError`] in strict mode if the sum overflows.
pub fn add_op<'g>(
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    with_promoted(a.into(), b.into(), "add", |a, b| {
        a.graph()
            .record(a.data() + b.data(), Op::Add(a.id(), b.id()))
    })
}

/// d(a + b)/da = d(a + b)/db = 1.
pub(crate) fn add_backward(nodes: &mut [Node], a: NodeId, b: NodeId, out_grad: f64) {
    nodes[a.index()].accumulate_grad(1.0 * out_grad);
    nodes[b.index()].accumulate_grad(1.0 * out_grad);
}

impl_binary_operator!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
