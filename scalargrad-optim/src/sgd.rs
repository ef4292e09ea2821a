// scalargrad-optim/src/sgd.rs

use crate::Optimizer;
use scalargrad_core::{ScalarGradError, Value};

/// Implements stochastic gradient descent, optionally with momentum and weight decay.
///
/// For every parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d
/// p = p - lr * v
/// ```
///
/// With both `momentum` and `weight_decay` at zero this is plain `p = p - lr * g`.
#[derive(Debug, Clone)]
pub struct Sgd<'g> {
    params: Vec<Value<'g>>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    velocity: Vec<f64>,
}

impl<'g> Sgd<'g> {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    /// * `params` - The leaves to optimize, usually `model.parameters()`.
    /// * `lr` - The learning rate.
    pub fn new(params: impl IntoIterator<Item = Value<'g>>, lr: f64) -> Self {
        let params: Vec<Value<'g>> = params.into_iter().collect();
        let velocity = vec![0.0; params.len()];
        Sgd {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            velocity,
        }
    }

    /// Sets the momentum factor (default 0).
    pub fn momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// Sets the L2 penalty factor (default 0).
    pub fn weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl<'g> Optimizer<'g> for Sgd<'g> {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        for (param, velocity) in self.params.iter().zip(self.velocity.iter_mut()) {
            let data = param.data();
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * data;
            }
            let update = if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + d_p;
                *velocity
            } else {
                d_p
            };
            param.set_data(data - self.lr * update)?;
        }
        log::debug!(
            "sgd: updated {} parameters (lr={}, momentum={}, weight_decay={})",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );
        Ok(())
    }

    fn params(&self) -> &[Value<'g>] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
