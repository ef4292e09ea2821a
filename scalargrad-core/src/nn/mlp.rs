use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::ops::Operand;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence, the output of layer `i`
/// becoming the input of layer `i + 1`.
#[derive(Debug, Clone)]
pub struct Mlp<'g> {
    layers: Vec<Layer<'g>>,
}

impl<'g> Mlp<'g> {
    /// Creates a network taking `nin` inputs with one layer per entry of `nouts`.
    ///
    /// `Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)` builds layers of shape 3→4, 4→4, 4→1.
    pub fn new<R: Rng + ?Sized>(graph: &'g Graph, nin: usize, nouts: &[usize], rng: &mut R) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(graph, pair[0], pair[1], rng))
            .collect();
        Mlp { layers }
    }

    /// Builds a network from existing layers.
    ///
    /// # Errors
    /// [`ScalarGradError::DimensionMismatch`] if a layer's input size differs from the
    /// previous layer's output size.
    pub fn from_layers(layers: Vec<Layer<'g>>) -> Result<Self, ScalarGradError> {
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(ScalarGradError::DimensionMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer<'g>] {
        &self.layers
    }

    /// Runs `inputs` through every layer.
    ///
    /// # Errors
    /// * [`ScalarGradError::EmptyInput`] if the network has no layers.
    /// * [`ScalarGradError::DimensionMismatch`] if `inputs` does not match the first layer.
    pub fn forward<I>(&self, inputs: &[I]) -> Result<Vec<Value<'g>>, ScalarGradError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        let (first, rest) = self
            .layers
            .split_first()
            .ok_or_else(|| ScalarGradError::EmptyInput {
                operation: "Mlp::forward".to_string(),
            })?;
        let mut x = first.forward(inputs)?;
        for layer in rest {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }
}

impl<'g> Module<'g> for Mlp<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<'g>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
