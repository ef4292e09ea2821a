use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{mse_loss, Mlp, Module, Reduction};
use scalargrad_core::{Graph, ScalarGradError};
use scalargrad_optim::{Optimizer, Sgd};

const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs `steps` SGD iterations, truncating the graph after each one.
/// Returns the loss and the arena size observed at every step.
fn train(
    graph: &Graph,
    mlp: &Mlp<'_>,
    optimizer: &mut Sgd<'_>,
    steps: usize,
) -> Result<(Vec<f64>, Vec<usize>), ScalarGradError> {
    let params_end = graph.checkpoint();
    let mut losses = Vec::with_capacity(steps);
    let mut sizes = Vec::with_capacity(steps);
    for _ in 0..steps {
        let preds = INPUTS
            .iter()
            .map(|x| mlp.forward(x).map(|out| out[0]))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = mse_loss(&preds, &TARGETS, Reduction::Sum)?;
        losses.push(loss.data());

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        sizes.push(graph.len());
        graph.truncate(params_end);
    }
    Ok((losses, sizes))
}

#[test]
fn test_sgd_training_reduces_loss() -> Result<(), ScalarGradError> {
    init_logger();
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut StdRng::seed_from_u64(42));
    let mut optimizer = Sgd::new(mlp.parameters(), 0.05);

    let (losses, _) = train(&graph, &mlp, &mut optimizer, 30)?;
    let (first, last) = (losses[0], losses[losses.len() - 1]);
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    Ok(())
}

#[test]
fn test_arena_does_not_grow_across_steps() -> Result<(), ScalarGradError> {
    init_logger();
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut StdRng::seed_from_u64(5));
    let params = mlp.parameters();
    assert_eq!(graph.len(), params.len());
    let mut optimizer = Sgd::new(params, 0.05).momentum(0.5);

    let (losses, sizes) = train(&graph, &mlp, &mut optimizer, 200)?;

    assert!(sizes.iter().all(|&n| n == sizes[0]), "arena grew: {:?}", sizes);
    assert_eq!(graph.len(), mlp.num_parameters());
    assert!(losses.iter().all(|l| l.is_finite()));
    // Parameters survive every truncation and keep being updated
    let last = losses[losses.len() - 1];
    assert!(last < losses[0]);
    Ok(())
}
