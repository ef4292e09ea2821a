use approx::assert_relative_eq;
use scalargrad_core::nn::{mse_loss, Layer, Mlp, Module, Neuron, Reduction};
use scalargrad_core::{Graph, ScalarGradError};

mod common;
use common::{init_logger, seeded_rng};

const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

/// Evaluates the network with plain `f64` arithmetic on the parameters' current data.
fn reference_forward(mlp: &Mlp<'_>, input: &[f64]) -> Vec<f64> {
    let mut x = input.to_vec();
    for layer in mlp.layers() {
        x = layer
            .neurons()
            .iter()
            .map(|n| {
                let mut act = n.bias().data();
                for (w, xi) in n.weights().iter().zip(&x) {
                    act += w.data() * xi;
                }
                act.tanh()
            })
            .collect();
    }
    x
}

/// Builds a layer from `(weights, bias)` rows.
fn fixed_layer<'g, const N: usize>(
    graph: &'g Graph,
    rows: &[([f64; N], f64)],
) -> Result<Layer<'g>, ScalarGradError> {
    let neurons = rows
        .iter()
        .map(|(w, b)| Neuron::with_weights(graph, w, *b))
        .collect();
    Layer::from_neurons(N, neurons)
}

#[test]
fn test_seeded_mlp_output_is_deterministic() -> Result<(), ScalarGradError> {
    init_logger();
    let g1 = Graph::new();
    let g2 = Graph::new();
    let m1 = Mlp::new(&g1, 3, &[4, 4, 1], &mut seeded_rng(1234));
    let m2 = Mlp::new(&g2, 3, &[4, 4, 1], &mut seeded_rng(1234));

    let out1 = m1.forward(&INPUTS[0])?;
    let out2 = m2.forward(&INPUTS[0])?;
    assert_eq!(out1.len(), 1);
    assert_eq!(out1[0].data(), out2[0].data());
    assert_relative_eq!(
        out1[0].data(),
        reference_forward(&m1, &INPUTS[0])[0],
        epsilon = 1e-12
    );

    out1[0].backward();
    for (name, p) in m1.named_parameters() {
        assert!(p.grad() != 0.0, "parameter {} received no gradient", name);
    }
    Ok(())
}

#[test]
fn test_fixed_weight_mlp_output_and_gradients() -> Result<(), ScalarGradError> {
    init_logger();
    let graph = Graph::new();
    let mlp = Mlp::from_layers(vec![
        fixed_layer(
            &graph,
            &[
                ([0.5, -0.2, 0.1], 0.05),
                ([-0.3, 0.8, 0.4], -0.1),
                ([0.7, 0.1, -0.6], 0.2),
                ([-0.4, -0.5, 0.9], 0.0),
            ],
        )?,
        fixed_layer(
            &graph,
            &[
                ([0.3, -0.7, 0.2, 0.5], 0.1),
                ([-0.6, 0.4, 0.9, -0.2], -0.3),
                ([0.1, 0.2, -0.3, 0.4], 0.05),
                ([0.8, -0.1, 0.3, -0.9], 0.15),
            ],
        )?,
        fixed_layer(&graph, &[([0.6, -0.4, 0.7, -0.5], -0.2)])?,
    ])?;

    let out = mlp.forward(&INPUTS[0])?[0];
    assert_relative_eq!(out.data(), -0.921_636_934_771_008_4, epsilon = 1e-12);

    out.backward();
    let last = &mlp.layers()[2].neurons()[0];
    let expected = [
        -0.091_324_864_515_788_8,
        0.110_027_505_796_897_13,
        -0.062_123_328_188_848_255,
        0.136_991_256_271_150_94,
    ];
    for (w, g) in last.weights().iter().zip(expected) {
        assert_relative_eq!(w.grad(), g, epsilon = 1e-12);
    }
    assert_relative_eq!(last.bias().grad(), 0.150_585_360_465_9, epsilon = 1e-12);
    assert_relative_eq!(
        mlp.layers()[1].neurons()[0].weights()[0].grad(),
        0.019_213_762_503_310_833,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        mlp.layers()[0].neurons()[0].weights()[0].grad(),
        0.057_369_813_017_025_574,
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn test_loss_gradient_reaches_every_parameter() -> Result<(), ScalarGradError> {
    init_logger();
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut seeded_rng(7));
    assert_eq!(mlp.num_parameters(), 41);

    let preds = INPUTS
        .iter()
        .map(|x| mlp.forward(x).map(|out| out[0]))
        .collect::<Result<Vec<_>, _>>()?;
    let loss = mse_loss(&preds, &TARGETS, Reduction::Sum)?;
    loss.backward();

    for (name, p) in mlp.named_parameters() {
        assert!(p.grad() != 0.0, "parameter {} received no gradient", name);
        assert!(p.grad().is_finite());
    }
    Ok(())
}
