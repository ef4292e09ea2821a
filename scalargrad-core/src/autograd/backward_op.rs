use crate::autograd::topo::build_topo;
use crate::node::{Node, NodeId, Op};
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::{add::add_backward, mul::mul_backward, pow::pow_backward};
use crate::ops::math_elem::exp::exp_backward;
use crate::value::Value;

/// Applies the local gradient rule of node `id`, accumulating into its operands.
///
/// Reads the node's own gradient and forward value; never writes to the node itself.
pub(crate) fn apply_local_backward(nodes: &mut [Node], id: NodeId) {
    let (op, out_data, out_grad) = {
        let node = &nodes[id.index()];
        (node.op, node.data, node.grad)
    };
    match op {
        Op::Leaf => {}
        Op::Add(a, b) => add_backward(nodes, a, b, out_grad),
        Op::Mul(a, b) => mul_backward(nodes, a, b, out_grad),
        Op::Pow { base, exponent } => pow_backward(nodes, base, exponent, out_grad),
        Op::Exp(a) => exp_backward(nodes, a, out_data, out_grad),
        Op::Tanh(a) => tanh_backward(nodes, a, out_data, out_grad),
    }
}

/// Computes the gradient of `root` with respect to every node it depends on.
///
/// Steps:
/// 1. topologically sort the nodes reachable from `root`;
/// 2. seed `root`'s gradient to `1.0` (overwriting whatever it held);
/// 3. walk the order in reverse, applying each node's local rule.
///
/// Afterwards every reachable node holds `∂root/∂node` evaluated at the current values,
/// **added to** whatever gradient it held before.
///
/// # Precondition
/// Gradients are not cleared automatically. When nodes are reused across several
/// backward passes, call [`Graph::zero_grad`](crate::graph::Graph::zero_grad) or
/// [`Module::zero_grad`](crate::nn::Module::zero_grad) first.
///
/// Calling this on a leaf sets its gradient to `1.0` and touches nothing else.
pub fn backward(root: &Value<'_>) {
    let mut nodes = root.graph().borrow_nodes_mut();
    let order = build_topo(&nodes, root.id());

    nodes[root.id().index()].grad = 1.0;
    for &id in order.iter().rev() {
        apply_local_backward(&mut nodes, id);
    }
    log::debug!(
        "backward: propagated from {} through {} nodes",
        root.id(),
        order.len()
    );
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
