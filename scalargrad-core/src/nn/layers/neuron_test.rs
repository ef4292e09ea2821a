#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::nn::{Module, Neuron};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_creation() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&graph, 3, &mut rng);
        assert_eq!(neuron.nin(), 3);
        assert_eq!(neuron.weights().len(), 3);
        assert_eq!(neuron.num_parameters(), 4);
        for p in neuron.parameters() {
            assert!(p.is_leaf());
            assert!((-1.0..=1.0).contains(&p.data()));
        }
        assert_eq!(neuron.bias().label().as_deref(), Some("b"));
        assert_eq!(neuron.weights()[2].label().as_deref(), Some("w2"));
    }

    #[test]
    fn test_neuron_forward_fixed_weights() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let neuron = Neuron::with_weights(&graph, &[0.5, -1.0], 0.25);
        let out = neuron.forward(&[2.0, 0.5])?;
        // tanh(0.25 + 0.5*2 - 1*0.5) = tanh(0.75)
        assert_relative_eq!(out.data(), 0.75f64.tanh(), epsilon = 1e-15);
        Ok(())
    }

    #[test]
    fn test_neuron_backward_reaches_parameters() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let neuron = Neuron::with_weights(&graph, &[0.5, -1.0], 0.25);
        let x0 = graph.leaf(2.0);
        let x1 = graph.leaf(0.5);
        let out = neuron.forward(&[x0, x1])?;
        out.backward();

        let dact = 1.0 - 0.75f64.tanh().powi(2);
        assert_relative_eq!(neuron.bias().grad(), dact, epsilon = 1e-12);
        assert_relative_eq!(neuron.weights()[0].grad(), 2.0 * dact, epsilon = 1e-12);
        assert_relative_eq!(neuron.weights()[1].grad(), 0.5 * dact, epsilon = 1e-12);
        assert_relative_eq!(x0.grad(), 0.5 * dact, epsilon = 1e-12);
        assert_relative_eq!(x1.grad(), -1.0 * dact, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_neuron_dimension_mismatch() {
        let graph = Graph::new();
        let neuron = Neuron::with_weights(&graph, &[0.5, -1.0], 0.0);
        let result = neuron.forward(&[1.0]);
        assert_eq!(
            result.unwrap_err(),
            ScalarGradError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_neuron_parameter_order() {
        let graph = Graph::new();
        let neuron = Neuron::with_weights(&graph, &[1.0, 2.0, 3.0], 4.0);
        let data: Vec<f64> = neuron.parameters().iter().map(|p| p.data()).collect();
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
        let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["w0", "w1", "w2", "b"]);
    }
}
