// scalargrad-core/src/ops/activation/tanh.rs

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::value::Value;

/// Hyperbolic tangent, `(e^(2a) - 1) / (e^(2a) + 1)`.
///
/// Evaluated with `f64::tanh`, which saturates to ±1 for large inputs instead of
/// overflowing the exponential.
pub fn tanh_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    a.graph().record(a.data().tanh(), Op::Tanh(a.id()))
}

/// d(tanh a)/da = 1 - tanh(a)^2, with tanh(a) read from the output node.
pub(crate) fn tanh_backward(nodes: &mut [Node], a: NodeId, out_data: f64, out_grad: f64) {
    nodes[a.index()].accumulate_grad((1.0 - out_data * out_data) * out_grad);
}

impl<'g> Value<'g> {
    /// Hyperbolic tangent of this value.
    pub fn tanh(self) -> Value<'g> {
        tanh_op(self).unwrap_or_else(|e| panic!("Value tanh operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
