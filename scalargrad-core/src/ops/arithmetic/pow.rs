// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::Operand;
use crate::value::Value;

/// Raises `base` to a constant power.
///
/// The exponent must be a raw number known at call time; it is stored in the node's
/// [`Op::Pow`] tag rather than as an operand.
///
/// # Errors
/// * [`ScalarGradError::InvalidOperand`] if `exponent` is a node.
/// * [`ScalarGradError::DomainError`] in strict mode for undefined results such as
///   `0 ^ -1` or `(-8) ^ 0.5`.
pub fn pow_op<'g>(
    base: Value<'g>,
    exponent: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(p) => p,
        Operand::Node(node) => {
            return Err(ScalarGradError::InvalidOperand {
                operation: "pow".to_string(),
                reason: format!(
                    "exponent must be a constant number, got graph node {}",
                    node.id()
                ),
            })
        }
    };
    base.graph().record(
        base.data().powf(exponent),
        Op::Pow {
            base: base.id(),
            exponent,
        },
    )
}

/// d(a^p)/da = p * a^(p - 1).
pub(crate) fn pow_backward(nodes: &mut [Node], base: NodeId, exponent: f64, out_grad: f64) {
    let base_data = nodes[base.index()].data;
    nodes[base.index()].accumulate_grad(exponent * base_data.powf(exponent - 1.0) * out_grad);
}

// --- Value Methods ---

impl<'g> Value<'g> {
    /// Fallible power; see [`pow_op`].
    pub fn pow(self, exponent: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this value to a constant power.
    ///
    /// # Panics
    /// If the graph runs in strict domain mode and the result is not finite.
    pub fn powf(self, exponent: f64) -> Value<'g> {
        pow_op(self, exponent)
            .unwrap_or_else(|e| panic!("Value power operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
