use crate::graph::Graph;
use crate::value::Value;
use rand::Rng;

/// Creates a leaf whose value is drawn uniformly from `[low, high]`.
///
/// The random source is passed in explicitly so initialization can be reproduced with
/// a seeded generator.
///
/// # Panics
/// If `low > high`.
pub fn uniform<'g, R: Rng + ?Sized>(graph: &'g Graph, rng: &mut R, low: f64, high: f64) -> Value<'g> {
    graph.leaf(rng.gen_range(low..=high))
}

/// Uniform initialization in `[-1, 1]`, used for all neuron weights and biases.
pub fn uniform_symmetric<'g, R: Rng + ?Sized>(graph: &'g Graph, rng: &mut R) -> Value<'g> {
    uniform(graph, rng, -1.0, 1.0)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
