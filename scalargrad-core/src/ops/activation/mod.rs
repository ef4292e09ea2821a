// Activation functions used by the nn layers
pub mod tanh;

pub use tanh::tanh_op;
