// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::{add_op, div_op, pow_op, sub_op, Operand};
use crate::value::Value;

/// Specifies the reduction to apply to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Σ (p − t)².
    #[default]
    Sum,
    /// Σ (p − t)² / n.
    Mean,
}

/// Computes the squared-error loss between `predictions` and `targets`.
///
/// Targets may be nodes or raw numbers. The result is an ordinary node, so calling
/// `backward` on it fills the gradients of every parameter behind the predictions.
///
/// # Errors
/// * [`ScalarGradError::EmptyInput`] if there are no predictions.
/// * [`ScalarGradError::DimensionMismatch`] if the lengths differ.
pub fn mse_loss<'g, T>(
    predictions: &[Value<'g>],
    targets: &[T],
    reduction: Reduction,
) -> Result<Value<'g>, ScalarGradError>
where
    T: Into<Operand<'g>> + Copy,
{
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::DimensionMismatch {
            expected: predictions.len(),
            actual: targets.len(),
        });
    }

    let mut pairs = predictions.iter().zip(targets);
    let (&p0, &t0) = pairs.next().ok_or_else(|| ScalarGradError::EmptyInput {
        operation: "mse_loss".to_string(),
    })?;
    let mut total = pow_op(sub_op(p0, t0)?, 2.0)?;
    for (&p, &t) in pairs {
        total = add_op(total, pow_op(sub_op(p, t)?, 2.0)?)?;
    }

    match reduction {
        Reduction::Sum => Ok(total),
        Reduction::Mean => div_op(total, predictions.len() as f64),
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
