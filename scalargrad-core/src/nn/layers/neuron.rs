use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::{add_op, mul_op, tanh_op, Operand};
use crate::value::Value;
use rand::Rng;

/// A single tanh unit: `tanh(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron<'g> {
    weights: Vec<Value<'g>>,
    bias: Value<'g>,
}

impl<'g> Neuron<'g> {
    /// Creates a neuron with `nin` weights.
    ///
    /// Weights, then the bias, are drawn uniformly from `[-1, 1]` using `rng`.
    ///
    /// # Arguments
    /// * `graph` - The graph that will own the parameter leaves.
    /// * `nin` - Input dimension.
    /// * `rng` - Random source for initialization.
    pub fn new<R: Rng + ?Sized>(graph: &'g Graph, nin: usize, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|i| init::uniform_symmetric(graph, rng).with_label(format!("w{}", i)))
            .collect();
        let bias = init::uniform_symmetric(graph, rng).with_label("b");
        Neuron { weights, bias }
    }

    /// Creates a neuron with fixed weights and bias.
    pub fn with_weights(graph: &'g Graph, weights: &[f64], bias: f64) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| graph.leaf_labeled(w, format!("w{}", i)))
            .collect();
        let bias = graph.leaf_labeled(bias, "b");
        Neuron { weights, bias }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value<'g>] {
        &self.weights
    }

    pub fn bias(&self) -> Value<'g> {
        self.bias
    }

    /// Evaluates the neuron on `inputs` (nodes or raw numbers).
    ///
    /// The pre-activation sum starts from the bias and adds `wᵢ·xᵢ` in input order.
    ///
    /// # Errors
    /// * [`ScalarGradError::DimensionMismatch`] if `inputs.len() != self.nin()`.
    /// * Any error from the underlying operations (e.g. an input from another graph).
    pub fn forward<I>(&self, inputs: &[I]) -> Result<Value<'g>, ScalarGradError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut act = self.bias;
        for (w, &x) in self.weights.iter().zip(inputs) {
            act = add_op(act, mul_op(*w, x)?)?;
        }
        tanh_op(act)
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value<'g>)> {
        let mut named: Vec<(String, Value<'g>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), *w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
