//! # Training a small MLP on scalar nodes
//!
//! Builds a 3 → [4, 4, 1] tanh network, fits it to four labelled samples with [`Sgd`]
//! on the summed squared error, and prints the loss as it goes.
//!
//! ## Steps
//! 1. Create a [`Graph`] and a seeded [`Mlp`], then take a checkpoint: everything
//!    before it is model parameters.
//! 2. Each iteration: forward every sample, compute `mse_loss`, zero the gradients,
//!    run `backward`, let the optimizer update the parameters, then truncate the graph
//!    back to the checkpoint so the arena does not grow.
//! 3. Print the final predictions next to their targets.
//!
//! Run with `RUST_LOG=debug cargo run -p scalargrad-optim --example train_mlp` to see
//! the engine's logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{mse_loss, Mlp, Module, Reduction};
use scalargrad_core::{Graph, ScalarGradError};
use scalargrad_optim::{Optimizer, Sgd};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng);
    let params_end = graph.checkpoint();
    println!("MLP with {} parameters", mlp.num_parameters());

    let mut optimizer = Sgd::new(mlp.parameters(), 0.05).momentum(0.5);
    let steps = 100;
    for step in 0..steps {
        let preds = xs
            .iter()
            .map(|x| mlp.forward(x).map(|out| out[0]))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = mse_loss(&preds, &ys, Reduction::Sum)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if step % 10 == 0 || step == steps - 1 {
            println!(
                "step {:>3}  loss {:.6}  (graph holds {} nodes)",
                step,
                loss.data(),
                graph.len()
            );
        }
        graph.truncate(params_end);
    }

    println!("\nPredictions after training:");
    for (x, y) in xs.iter().zip(ys) {
        let pred = mlp.forward(x)?[0];
        println!("  {:?} -> {:+.4} (target {:+.1})", x, pred.data(), y);
    }
    Ok(())
}
