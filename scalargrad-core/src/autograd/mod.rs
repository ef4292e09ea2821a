//! # Reverse-mode engine (`autograd`)
//!
//! - [`topo`]: orders the nodes reachable from a root so every operand precedes its
//!   consumers.
//! - [`backward_op`]: the backward pass itself and the dispatch from an [`Op`](crate::node::Op)
//!   tag to its local gradient rule.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//! - [`trace`]: read-only (nodes, edges) view of a graph, for diagnostics.

pub mod backward_op;
pub mod grad_check;
pub mod topo;
pub mod trace;

pub use backward_op::backward;
pub use topo::topological_order;
pub use trace::trace;
