#[cfg(test)]
mod tests {
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::nn::{Layer, Mlp, Module};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_shapes_and_parameter_count() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng);
        let layers = mlp.layers();
        assert_eq!(layers.len(), 3);
        assert_eq!((layers[0].nin(), layers[0].nout()), (3, 4));
        assert_eq!((layers[1].nin(), layers[1].nout()), (4, 4));
        assert_eq!((layers[2].nin(), layers[2].nout()), (4, 1));
        // 4*(3+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(mlp.num_parameters(), 41);
    }

    #[test]
    fn test_mlp_named_parameters() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mlp = Mlp::new(&graph, 2, &[2, 1], &mut rng);
        let names: Vec<String> = mlp.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names.first().map(String::as_str), Some("layer0.neuron0.w0"));
        assert_eq!(names.last().map(String::as_str), Some("layer1.neuron0.b"));
        assert_eq!(names.len(), mlp.parameters().len());
    }

    #[test]
    fn test_mlp_forward_feeds_layers_in_sequence() -> Result<(), ScalarGradError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mlp = Mlp::new(&graph, 2, &[3, 2], &mut rng);
        let input = [0.5, -1.5];
        let out = mlp.forward(&input)?;
        let hidden = mlp.layers()[0].forward(&input)?;
        let manual = mlp.layers()[1].forward(&hidden)?;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].data(), manual[0].data());
        assert_eq!(out[1].data(), manual[1].data());
        Ok(())
    }

    #[test]
    fn test_mlp_from_layers_checks_adjacent_dimensions() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(9);
        let l1 = Layer::new(&graph, 3, 4, &mut rng);
        let l2 = Layer::new(&graph, 5, 1, &mut rng);
        let result = Mlp::from_layers(vec![l1, l2]);
        assert_eq!(
            result.unwrap_err(),
            ScalarGradError::DimensionMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_mlp_without_layers_rejects_forward() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(9);
        let mlp = Mlp::new(&graph, 3, &[], &mut rng);
        assert!(matches!(
            mlp.forward(&[1.0, 2.0, 3.0]),
            Err(ScalarGradError::EmptyInput { .. })
        ));
    }
}
