// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::{with_promoted, Operand};
use crate::value::Value;

/// Multiplies two operands: `a * b`.
///
/// # Errors
/// Same as [`add_op`](crate::ops::add_op).
pub fn mul_op<'g>(
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    with_promoted(a.into(), b.into(), "mul", |a, b| {
        a.graph()
            .record(a.data() * b.data(), Op::Mul(a.id(), b.id()))
    })
}

/// d(a * b)/da = b, d(a * b)/db = a.
pub(crate) fn mul_backward(nodes: &mut [Node], a: NodeId, b: NodeId, out_grad: f64) {
    let a_data = nodes[a.index()].data;
    let b_data = nodes[b.index()].data;
    nodes[a.index()].accumulate_grad(b_data * out_grad);
    nodes[b.index()].accumulate_grad(a_data * out_grad);
}

impl_binary_operator!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
