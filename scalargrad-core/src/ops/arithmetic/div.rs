use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::{with_promoted, Operand};
use crate::value::Value;

/// Divides `a` by `b`, built as `a * b^-1`.
///
/// Division by a node holding exactly zero yields an infinite (or NaN) result that
/// propagates, unless the graph runs in strict domain mode. A failed division leaves
/// no intermediate node behind.
pub fn div_op<'g>(
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    with_promoted(a.into(), b.into(), "div", |a, b| mul_op(a, pow_op(b, -1.0)?))
}

impl_binary_operator!(Div, div, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
