use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::{with_promoted, Operand};
use crate::value::Value;

/// Subtracts `b` from `a`, built as `a + (-b)`.
///
/// On failure none of the intermediate nodes remain in the graph.
pub fn sub_op<'g>(
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    with_promoted(a.into(), b.into(), "sub", |a, b| add_op(a, neg_op(b)?))
}

impl_binary_operator!(Sub, sub, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
