use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Out+: {out_plus:?}, Out-: {out_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        out_plus: f64,
        out_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    Forward(#[from] ScalarGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and must return the
/// scalar output. It is evaluated once for the backward pass and twice per input for
/// `f(x + ε)` and `f(x − ε)`, each time on a new graph.
///
/// An input fails when its analytical and numerical gradients differ by more than
/// `tolerance` both absolutely and relative to the larger magnitude.
///
/// # Returns
/// `Ok(())` if every input passes, otherwise the first failure.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let analytical = {
        let graph = Graph::new();
        let leaves = make_leaves(&graph, inputs);
        let output = func(&graph, &leaves)?;
        output.backward();
        let grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();
        grads
    };

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;

        let out_plus = evaluate(&func, &plus)?;
        let out_minus = evaluate(&func, &minus)?;
        let numerical_grad = (out_plus - out_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                out_plus,
                out_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        // --- 3. Compare ---
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

fn make_leaves<'g>(graph: &'g Graph, inputs: &[f64]) -> Vec<Value<'g>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf_labeled(x, format!("x{}", i)))
        .collect()
}

/// Forward-only evaluation of `func` on a fresh graph.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, ScalarGradError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves = make_leaves(&graph, inputs);
    let data = func(&graph, &leaves)?.data();
    Ok(data)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
