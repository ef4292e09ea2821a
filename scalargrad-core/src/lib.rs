//! Scalar reverse-mode automatic differentiation.
//!
//! Operations on [`Value`] handles record nodes in a [`Graph`] arena as they execute;
//! [`Value::backward`] then computes the gradient of that value with respect to every
//! node it depends on in a single reverse traversal. The [`nn`] module builds a small
//! multi-layer perceptron out of the same scalar nodes.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = a * b + 10.0;
//! c.backward();
//! assert_eq!(c.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

// Declare the main modules of the crate
pub mod autograd;
pub mod graph;
pub mod node;
pub mod ops;
pub mod value;

pub mod nn;

pub mod error;
pub use error::ScalarGradError;

// Re-export the core types so they are reachable as `scalargrad_core::Value` etc.
pub use autograd::{backward, topological_order, trace};
pub use graph::{Checkpoint, Graph, GraphOptions};
pub use node::{NodeId, Op};
pub use ops::Operand;
pub use value::Value;
