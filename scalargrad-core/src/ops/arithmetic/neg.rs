use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a node by multiplying it with a `-1` leaf.
pub fn neg_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    mul_op(a, -1.0)
}

impl<'g> std::ops::Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Self::Output {
        neg_op(self).unwrap_or_else(|e| panic!("Value neg operation failed: {}", e))
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
