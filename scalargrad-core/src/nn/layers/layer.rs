use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::ops::Operand;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `nout` independent neurons sharing the same input.
#[derive(Debug, Clone)]
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
    nin: usize,
}

impl<'g> Layer<'g> {
    /// Creates a new layer of `nout` randomly initialized neurons, each taking `nin` inputs.
    pub fn new<R: Rng + ?Sized>(graph: &'g Graph, nin: usize, nout: usize, rng: &mut R) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(graph, nin, rng)).collect();
        Layer { neurons, nin }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// [`ScalarGradError::DimensionMismatch`] if the neurons do not all take `nin` inputs.
    pub fn from_neurons(nin: usize, neurons: Vec<Neuron<'g>>) -> Result<Self, ScalarGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarGradError::DimensionMismatch {
                expected: nin,
                actual: bad.nin(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<'g>] {
        &self.neurons
    }

    /// Feeds the same input to every neuron, returning one output per neuron.
    pub fn forward<I>(&self, inputs: &[I]) -> Result<Vec<Value<'g>>, ScalarGradError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl<'g> Module<'g> for Layer<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<'g>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", j, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
