//! # Operation Set (`ops`)
//!
//! The fixed library of differentiable scalar operations.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a fallible entry point (`add_op`, `mul_op`,
//!   `pow_op`, ...) that promotes raw numbers to leaves, computes the forward value and
//!   records the result node with its [`Op`](crate::node::Op) tag.
//! - **`_backward` Functions:** The primitive operations (add, mul, pow, exp, tanh) own a
//!   local gradient rule. The backward engine dispatches to them by matching on the tag.
//!   `neg`, `sub` and `div` are compositions and inherit their rules.
//! - **Operator sugar:** `std::ops` traits on [`Value`] forward to the `_op` functions and
//!   panic if those fail.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`math_elem`]: element functions (exp).
//! - [`activation`]: activation functions (tanh).

use crate::error::ScalarGradError;
use crate::value::Value;

/// One side of an operation: either an existing node or a raw number that will be
/// promoted to a leaf by the operation entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'g> {
    Node(Value<'g>),
    Scalar(f64),
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Node(value)
    }
}

impl<'g> From<&Value<'g>> for Operand<'g> {
    fn from(value: &Value<'g>) -> Self {
        Operand::Node(*value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(data: f64) -> Self {
        Operand::Scalar(data)
    }
}

impl From<f32> for Operand<'_> {
    fn from(data: f32) -> Self {
        Operand::Scalar(data as f64)
    }
}

impl From<i32> for Operand<'_> {
    fn from(data: i32) -> Self {
        Operand::Scalar(data as f64)
    }
}

/// Promotes both operands of a binary operation into the same graph and runs `f` on
/// the resulting nodes.
///
/// The graph is taken from whichever operand is a node; two raw numbers have no graph
/// to live in and are rejected. If promotion or `f` fails, every node recorded along
/// the way (promoted leaves, intermediates of derived operations) is released again.
pub(crate) fn with_promoted<'g>(
    a: Operand<'g>,
    b: Operand<'g>,
    operation: &str,
    f: impl FnOnce(Value<'g>, Value<'g>) -> Result<Value<'g>, ScalarGradError>,
) -> Result<Value<'g>, ScalarGradError> {
    let graph = match (&a, &b) {
        (Operand::Node(v), _) | (_, Operand::Node(v)) => v.graph(),
        _ => {
            return Err(ScalarGradError::InvalidOperand {
                operation: operation.to_string(),
                reason: "at least one operand must be a graph node".to_string(),
            })
        }
    };
    graph.rollback_on_err(|| {
        let a = graph.promote(a, operation)?;
        let b = graph.promote(b, operation)?;
        f(a, b)
    })
}

/// Implements a `std::ops` binary operator for `Value ∘ Value`, `Value ∘ f64` and
/// `f64 ∘ Value` on top of a fallible `_op` function.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<'g> std::ops::$trait for $crate::value::Value<'g> {
            type Output = $crate::value::Value<'g>;

            fn $method(self, rhs: $crate::value::Value<'g>) -> Self::Output {
                $op_fn(self, rhs).unwrap_or_else(|e| {
                    panic!("Value {} operation failed: {}", stringify!($method), e)
                })
            }
        }

        impl<'g> std::ops::$trait<f64> for $crate::value::Value<'g> {
            type Output = $crate::value::Value<'g>;

            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(self, rhs).unwrap_or_else(|e| {
                    panic!("Value {} operation failed: {}", stringify!($method), e)
                })
            }
        }

        impl<'g> std::ops::$trait<$crate::value::Value<'g>> for f64 {
            type Output = $crate::value::Value<'g>;

            fn $method(self, rhs: $crate::value::Value<'g>) -> Self::Output {
                $op_fn(self, rhs).unwrap_or_else(|e| {
                    panic!("Value {} operation failed: {}", stringify!($method), e)
                })
            }
        }
    };
}

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
