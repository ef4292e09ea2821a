// src/nn/mod.rs
// Neural network building blocks composed from scalar nodes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Neuron};
pub use losses::{mse_loss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
