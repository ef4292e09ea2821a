// scalargrad-core/src/node.rs

use std::fmt;

/// Stable index of a node inside its [`Graph`](crate::graph::Graph) arena.
///
/// Ids are handed out in creation order, so an operand always has a smaller id than
/// the node consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The operation that produced a node, together with its operand ids and any
/// op-specific constant.
///
/// The backward engine matches on this tag to pick the local gradient rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A raw input or parameter. Has no operands.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// `base ^ exponent` where the exponent is a constant fixed at construction.
    Pow { base: NodeId, exponent: f64 },
    Exp(NodeId),
    Tanh(NodeId),
}

impl Op {
    /// Operand ids in the order they were given to the operation.
    ///
    /// A node used twice (e.g. `a + a`) appears twice.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow { base, .. } => vec![base],
            Op::Exp(a) | Op::Tanh(a) => vec![a],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Short operation name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(..) => "add",
            Op::Mul(..) => "mul",
            Op::Pow { .. } => "pow",
            Op::Exp(_) => "exp",
            Op::Tanh(_) => "tanh",
        }
    }
}

impl fmt::Display for Op {
    /// Writes the operation tag: empty for leaves, `+`, `*`, `**p`, `exp`, `tanh`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow { exponent, .. } => write!(f, "**{}", exponent),
            Op::Exp(_) => write!(f, "exp"),
            Op::Tanh(_) => write!(f, "tanh"),
        }
    }
}

/// Storage for a single scalar node in the arena.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(data: f64, op: Op) -> Self {
        Node {
            data,
            grad: 0.0,
            op,
            label: None,
        }
    }

    /// The only way a backward rule may touch a gradient.
    pub(crate) fn accumulate_grad(&mut self, contribution: f64) {
        self.grad += contribution;
    }
}
