use crate::autograd;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Handle to a scalar node stored in a [`Graph`].
///
/// Copying a `Value` copies the handle, not the node: two copies always observe the same
/// data and gradient. Equality and hashing use node identity.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The forward value of this node.
    pub fn data(&self) -> f64 {
        self.graph.borrow_nodes()[self.id.index()].data
    }

    /// The accumulated gradient. Meaningful after a backward pass over a root that
    /// depends on this node.
    pub fn grad(&self) -> f64 {
        self.graph.borrow_nodes()[self.id.index()].grad
    }

    pub fn op(&self) -> Op {
        self.graph.borrow_nodes()[self.id.index()].op
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.borrow_nodes()[self.id.index()].label.clone()
    }

    /// Attaches a diagnostic label. Has no effect on any computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.borrow_nodes_mut()[self.id.index()].label = Some(label.into());
    }

    /// Builder-style variant of [`set_label`](Self::set_label).
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// The nodes this one was computed from, in operand order.
    pub fn operands(&self) -> Vec<Value<'g>> {
        self.op()
            .operands()
            .into_iter()
            .map(|id| Value::new(self.graph, id))
            .collect()
    }

    /// Overwrites the data of a leaf node.
    ///
    /// Nodes already computed from this leaf keep their old values; rebuild the
    /// forward pass after changing parameters.
    ///
    /// # Errors
    /// [`ScalarGradError::NonLeafMutation`] if this node is the result of an operation.
    pub fn set_data(&self, data: f64) -> Result<(), ScalarGradError> {
        let mut nodes = self.graph.borrow_nodes_mut();
        let node = &mut nodes[self.id.index()];
        if !node.op.is_leaf() {
            return Err(ScalarGradError::NonLeafMutation { id: self.id });
        }
        node.data = data;
        Ok(())
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.graph.borrow_nodes_mut()[self.id.index()].grad = 0.0;
    }

    /// Runs a backward pass rooted at this node. See [`autograd::backward`].
    pub fn backward(&self) {
        autograd::backward(self)
    }

    /// Nodes reachable from this one, each after all of its operands.
    pub fn topological_order(&self) -> Vec<Value<'g>> {
        autograd::topological_order(self)
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.graph as *const Graph).hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.borrow_nodes();
        let node = &nodes[self.id.index()];
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .field("label", &node.label)
            .finish()
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={} grad={})", self.data(), self.grad())
    }
}
