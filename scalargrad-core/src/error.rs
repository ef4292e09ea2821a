use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operand could not take part in the requested operation, e.g. a node passed as
    /// the exponent of `pow`, or a node belonging to another graph.
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    /// A forward computation produced NaN or an infinity from finite operands.
    /// Only raised when the graph runs with `GraphOptions::strict_domain`.
    #[error("Domain error in operation {operation}: result {value} is not finite")]
    DomainError { operation: String, value: f64 },

    #[error("Cannot set the value of non-leaf node {id}")]
    NonLeafMutation { id: NodeId },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },
}
