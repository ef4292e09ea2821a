//! # Computation graph arena
//!
//! Every scalar produced during a computation lives in a [`Graph`]. Nodes are appended
//! as operations execute and are never removed or rewired, so the operand links always
//! form a DAG and a node's id is larger than the ids of all of its operands.
//!
//! A [`Value`] is a cheap `Copy` handle (`&Graph` + [`NodeId`]); all reads and gradient
//! writes go through the arena's `RefCell`.
//!
//! Nodes recorded after a [`Checkpoint`] can be released with [`Graph::truncate`]. A
//! training loop takes a checkpoint once the model parameters exist and truncates back
//! to it after every step, so the arena stays the size of one forward pass.

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::Operand;
use crate::value::Value;
use std::cell::{Cell, Ref, RefCell, RefMut};

/// Behaviour switches for a [`Graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphOptions {
    /// When `true`, an operation that turns finite operands into NaN or an infinity
    /// fails with [`ScalarGradError::DomainError`]. When `false` (the default) the IEEE
    /// special value is stored and propagates to the caller.
    pub strict_domain: bool,
    /// Number of nodes to pre-allocate in the arena.
    pub capacity: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            strict_domain: false,
            capacity: 0,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_domain(mut self, strict: bool) -> Self {
        self.strict_domain = strict;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Arena length captured by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Number of nodes that survive a truncation to this checkpoint.
    pub fn len(self) -> usize {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Arena owning every node of one computation.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
    options: GraphOptions,
    warned_non_finite: Cell<bool>,
}

impl Graph {
    /// Creates an empty graph with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(options.capacity)),
            options,
            warned_non_finite: Cell::new(false),
        }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Creates a leaf node holding `data`, with zero gradient and no operands.
    pub fn leaf(&self, data: f64) -> Value<'_> {
        self.push(Node::new(data, Op::Leaf))
    }

    /// Creates a leaf node carrying a diagnostic label.
    pub fn leaf_labeled(&self, data: f64, label: impl Into<String>) -> Value<'_> {
        let mut node = Node::new(data, Op::Leaf);
        node.label = Some(label.into());
        self.push(node)
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node in the arena to zero.
    ///
    /// `backward` never clears gradients on its own; call this (or
    /// [`Module::zero_grad`](crate::nn::Module::zero_grad)) between passes that reuse nodes.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.len())
    }

    /// Releases every node recorded after `checkpoint`.
    ///
    /// Nodes older than the checkpoint never refer to newer ones, so what remains is a
    /// complete graph. Handles to released nodes must not be used again: their ids are
    /// either out of range (reads panic) or reused by nodes recorded later.
    /// Truncating to a checkpoint at or past the current end does nothing.
    pub fn truncate(&self, checkpoint: Checkpoint) {
        let mut nodes = self.nodes.borrow_mut();
        if checkpoint.0 < nodes.len() {
            log::debug!(
                "graph: releasing {} nodes (keeping {})",
                nodes.len() - checkpoint.0,
                checkpoint.0
            );
            nodes.truncate(checkpoint.0);
        }
    }

    /// Runs a composed operation, releasing every node it recorded if it fails.
    ///
    /// A failed operation leaves the arena exactly as it found it, including the
    /// leaves it promoted and the intermediate nodes of derived operations.
    pub(crate) fn rollback_on_err<T>(
        &self,
        f: impl FnOnce() -> Result<T, ScalarGradError>,
    ) -> Result<T, ScalarGradError> {
        let checkpoint = self.checkpoint();
        let result = f();
        if result.is_err() {
            self.truncate(checkpoint);
        }
        result
    }

    /// Turns an operand into a node of this graph.
    ///
    /// Raw numbers become fresh leaves. Nodes are passed through after checking that
    /// they belong to this graph.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidOperand`] if the node was created by another graph.
    pub fn promote<'g>(
        &'g self,
        operand: Operand<'g>,
        operation: &str,
    ) -> Result<Value<'g>, ScalarGradError> {
        match operand {
            Operand::Scalar(data) => Ok(self.leaf(data)),
            Operand::Node(value) if self.owns(&value) => Ok(value),
            Operand::Node(value) => Err(ScalarGradError::InvalidOperand {
                operation: operation.to_string(),
                reason: format!("node {} belongs to a different graph", value.id()),
            }),
        }
    }

    /// `true` if `value` is a handle into this arena.
    pub fn owns(&self, value: &Value<'_>) -> bool {
        std::ptr::eq(self, value.graph())
    }

    /// Records the result of an operation.
    ///
    /// Applies the domain policy: a non-finite `data` computed from finite operands is
    /// rejected in strict mode and logged once otherwise.
    pub(crate) fn record(&self, data: f64, op: Op) -> Result<Value<'_>, ScalarGradError> {
        if !data.is_finite() {
            let operands_finite = {
                let nodes = self.nodes.borrow();
                op.operands()
                    .iter()
                    .all(|id| nodes[id.index()].data.is_finite())
            };
            if operands_finite {
                if self.options.strict_domain {
                    return Err(ScalarGradError::DomainError {
                        operation: op.name().to_string(),
                        value: data,
                    });
                }
                if !self.warned_non_finite.replace(true) {
                    log::warn!(
                        "operation {} produced non-finite value {} from finite operands; propagating",
                        op.name(),
                        data
                    );
                }
            }
        }
        Ok(self.push(Node::new(data, op)))
    }

    fn push(&self, node: Node) -> Value<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId::new(nodes.len());
        log::trace!("graph: new node {} op={} data={}", id, node.op.name(), node.data);
        nodes.push(node);
        Value::new(self, id)
    }

    pub(crate) fn borrow_nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn borrow_nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
