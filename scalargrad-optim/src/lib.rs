//! Optimizers for scalargrad model parameters.
//!
//! An optimizer takes the flattened parameter list of a model (see
//! [`Module::parameters`](scalargrad_core::nn::Module::parameters)) and updates each
//! leaf in place from its accumulated gradient. Nodes computed from those leaves keep
//! their old values, so the forward pass must be rebuilt after every step.

use scalargrad_core::{ScalarGradError, Value};

pub mod sgd;

pub use sgd::Sgd;

/// Trait for optimization algorithms.
pub trait Optimizer<'g> {
    /// Performs a single optimization step (parameter update) from the current gradients.
    ///
    /// # Errors
    /// [`ScalarGradError::NonLeafMutation`] if a managed parameter is not a leaf.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    /// Call it before each backward pass; gradients otherwise accumulate.
    fn zero_grad(&self) {
        for param in self.params() {
            param.zero_grad();
        }
    }

    /// The parameters managed by the optimizer, in the order they were given.
    fn params(&self) -> &[Value<'g>];
}
