use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns leaf nodes as its trainable parameters. It exposes them for an external
/// optimizer; the autograd engine treats them like any other node.
pub trait Module<'g>: std::fmt::Debug {
    /// Returns all learnable parameters of the module, flattened.
    ///
    /// The order is stable across calls and follows construction order, including the
    /// parameters of sub-modules.
    fn parameters(&self) -> Vec<Value<'g>>;

    /// Returns the parameters with hierarchical names (e.g. `"layer1.neuron0.w2"`),
    /// in the same order as [`parameters`](Self::parameters).
    fn named_parameters(&self) -> Vec<(String, Value<'g>)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
