// scalargrad-core/src/ops/math_elem/exp.rs

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::value::Value;

/// Computes `e^a`.
///
/// # Errors
/// [`ScalarGradError::DomainError`] in strict mode when the result overflows.
pub fn exp_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    a.graph().record(a.data().exp(), Op::Exp(a.id()))
}

/// d(e^a)/da = e^a, which is the output's own value.
///
/// Accumulates like every other rule so that `exp` nodes reached through several
/// consumers collect all contributions.
pub(crate) fn exp_backward(nodes: &mut [Node], a: NodeId, out_data: f64, out_grad: f64) {
    nodes[a.index()].accumulate_grad(out_data * out_grad);
}

impl<'g> Value<'g> {
    /// Exponential of this value.
    ///
    /// # Panics
    /// If the graph runs in strict domain mode and the result overflows.
    pub fn exp(self) -> Value<'g> {
        exp_op(self).unwrap_or_else(|e| panic!("Value exp operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
