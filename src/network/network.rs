use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::loss::mse::sum_squared_error;
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;
use crate::network::dataset::{Dataset, SAMPLE_SHAPE};
use crate::network::evaluation::{Evaluation, SamplePrediction};

/// Units per layer. The topology is always 2 inputs, 2 hidden, 2 outputs.
const WIDTH: usize = 2;
const WEIGHT_SHAPE: (usize, usize) = (WIDTH, WIDTH);

/// Intermediate values of one forward pass.
struct Propagation {
    /// Hidden pre-activation, `W_in · input`.
    in_a: Matrix,
    out_a: Matrix,
    /// Output pre-activation, `W_hidden · out_a`.
    in_b: Matrix,
    out_b: Matrix,
}

/// Two-layer network trained one random sample at a time.
///
/// Borrows its dataset for its whole lifetime and never writes to it.
#[derive(Debug)]
pub struct Network<'d> {
    input_weights: Matrix,
    hidden_weights: Matrix,
    dataset: Dataset<'d>,
    activation: ActivationFunction,
    activate: fn(f64) -> f64,
    activate_derivative: fn(f64) -> f64,
    learning_rate: f64,
    rng: StdRng,
}

impl<'d> Network<'d> {
    /// Builds an unseeded network with the default learning rate.
    pub fn new(
        inputs: &'d [Matrix],
        expected_outputs: &'d [Matrix],
        activation: ActivationFunction,
    ) -> Result<Network<'d>> {
        Network::with_config(inputs, expected_outputs, NetworkConfig::new(activation))
    }

    /// Validates the dataset and draws both weight matrices from U[0, 1),
    /// input weights first.
    pub fn with_config(
        inputs: &'d [Matrix],
        expected_outputs: &'d [Matrix],
        config: NetworkConfig,
    ) -> Result<Network<'d>> {
        let dataset = Dataset::new(inputs, expected_outputs)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let input_weights = Matrix::random_uniform(WIDTH, WIDTH, &mut rng);
        let hidden_weights = Matrix::random_uniform(WIDTH, WIDTH, &mut rng);
        let (activate, activate_derivative) = config.activation.pair();

        debug!(
            samples = dataset.len(),
            activation = ?config.activation,
            learning_rate = config.learning_rate,
            seed = ?config.seed,
            "network constructed"
        );

        Ok(Network {
            input_weights,
            hidden_weights,
            dataset,
            activation: config.activation,
            activate,
            activate_derivative,
            learning_rate: config.learning_rate,
            rng,
        })
    }

    pub fn input_weights(&self) -> &Matrix {
        &self.input_weights
    }

    pub fn hidden_weights(&self) -> &Matrix {
        &self.hidden_weights
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    /// Replaces both weight matrices. Anything other than 2×2 is rejected and
    /// leaves the current weights untouched.
    pub fn set_weights(&mut self, input_weights: Matrix, hidden_weights: Matrix) -> Result<()> {
        for weights in [&input_weights, &hidden_weights] {
            if weights.shape() != WEIGHT_SHAPE {
                return Err(NetworkError::DimensionMismatch {
                    op: "set_weights",
                    left: weights.shape(),
                    right: WEIGHT_SHAPE,
                });
            }
        }

        self.input_weights = input_weights;
        self.hidden_weights = hidden_weights;
        Ok(())
    }

    /// Output of the network for a 2×1 input. Does not touch any state.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        Ok(self.propagate(input)?.out_b)
    }

    fn propagate(&self, input: &Matrix) -> Result<Propagation> {
        if input.shape() != SAMPLE_SHAPE {
            return Err(NetworkError::DimensionMismatch {
                op: "forward",
                left: input.shape(),
                right: SAMPLE_SHAPE,
            });
        }

        let in_a = self.input_weights.multiply(input)?;
        let out_a = in_a.map(self.activate);
        let in_b = self.hidden_weights.multiply(&out_a)?;
        let out_b = in_b.map(self.activate);

        Ok(Propagation { in_a, out_a, in_b, out_b })
    }

    /// Uniform draw over `[0, len)`; the dataset is never empty.
    pub(crate) fn sample_index(&mut self) -> usize {
        self.rng.gen_range(0..self.dataset.len())
    }

    /// Runs one stochastic gradient-descent step on a randomly chosen sample
    /// and returns that sample's summed squared error before the update.
    pub fn train_step(&mut self) -> Result<f64> {
        let index = self.sample_index();
        let dataset = self.dataset;
        let (input, expected) = dataset.get(index).ok_or_else(|| {
            NetworkError::InvalidDataset(format!("sample {index} out of range"))
        })?;

        let p = self.propagate(input)?;
        let loss = sum_squared_error(&p.out_b, expected)?;
        let derivative = self.activate_derivative;

        // Output layer: the derivative term belongs to output unit `o` and is
        // shared by both of its incoming weights.
        let mut delta_out = Matrix::zeros(WIDTH, WIDTH);
        for o in 0..WIDTH {
            let error = 2.0 * (p.out_b[(o, 0)] - expected[(o, 0)]);
            let slope = derivative(p.in_b[(o, 0)]);
            for h in 0..WIDTH {
                delta_out[(o, h)] = error * slope * p.out_a[(h, 0)];
            }
        }

        // Hidden layer: sum the output deltas feeding from hidden unit `h`.
        let mut delta_in = Matrix::zeros(WIDTH, WIDTH);
        for h in 0..WIDTH {
            let back = delta_out[(0, h)] + delta_out[(1, h)];
            let slope = derivative(p.in_a[(h, 0)]);
            for i in 0..WIDTH {
                delta_in[(h, i)] = back * slope * input[(i, 0)];
            }
        }

        for r in 0..WIDTH {
            for c in 0..WIDTH {
                self.hidden_weights[(r, c)] -= self.learning_rate * delta_out[(r, c)];
                self.input_weights[(r, c)] -= self.learning_rate * delta_in[(r, c)];
            }
        }

        Ok(loss)
    }

    /// Forward-propagates every sample and reports each prediction.
    pub fn evaluate(&self) -> Result<Evaluation> {
        let mut samples = Vec::with_capacity(self.dataset.len());

        for (index, (input, expected)) in self.dataset.iter().enumerate() {
            let output = self.forward(input)?;
            let sample = SamplePrediction::new(
                index,
                [output[(0, 0)], output[(1, 0)]],
                [expected[(0, 0)], expected[(1, 0)]],
            );

            debug!(
                index,
                output = ?sample.predicted,
                expected = ?sample.expected,
                correct = sample.correct,
                "evaluated sample"
            );
            samples.push(sample);
        }

        Ok(Evaluation::from_samples(samples))
    }

    /// Fraction of samples whose two outputs are both within 0.5 of target.
    pub fn evaluate_accuracy(&self) -> Result<f64> {
        Ok(self.evaluate()?.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::{sigmoid, sigmoid_derivative};

    fn col(a: f64, b: f64) -> Matrix {
        Matrix::column(&[a, b])
    }

    fn halves() -> Matrix {
        Matrix::from_data(vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap()
    }

    #[test]
    fn test_construction_rejects_invalid_dataset() {
        let inputs = vec![col(1.0, 0.0)];
        let expected = vec![col(1.0, 0.0), col(0.0, 1.0)];

        let err = Network::new(&inputs, &expected, ActivationFunction::Sigmoid).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidDataset(_)));
    }

    #[test]
    fn test_weights_are_2x2_in_unit_interval() {
        let inputs = vec![col(1.0, 0.0)];
        let expected = vec![col(1.0, 0.0)];
        let config = NetworkConfig::new(ActivationFunction::ReLU).with_seed(3);

        let network = Network::with_config(&inputs, &expected, config).unwrap();

        for weights in [network.input_weights(), network.hidden_weights()] {
            assert_eq!(weights.shape(), (2, 2));
            assert!(weights.data().iter().flatten().all(|&w| (0.0..1.0).contains(&w)));
        }
        assert_eq!(network.learning_rate(), 0.5);
        assert_eq!(network.activation(), ActivationFunction::ReLU);
        assert_eq!(network.dataset_len(), 1);
    }

    #[test]
    fn test_same_seed_same_weights() {
        let inputs = vec![col(1.0, 0.0)];
        let expected = vec![col(1.0, 0.0)];
        let config = NetworkConfig::new(ActivationFunction::Sigmoid).with_seed(11);

        let a = Network::with_config(&inputs, &expected, config).unwrap();
        let b = Network::with_config(&inputs, &expected, config).unwrap();

        assert_eq!(a.input_weights(), b.input_weights());
        assert_eq!(a.hidden_weights(), b.hidden_weights());
        assert_ne!(a.input_weights(), a.hidden_weights());
    }

    #[test]
    fn test_set_weights_rejects_wrong_shape() {
        let inputs = vec![col(1.0, 0.0)];
        let expected = vec![col(1.0, 0.0)];
        let mut network = Network::new(&inputs, &expected, ActivationFunction::Sigmoid).unwrap();
        let before = network.input_weights().clone();

        let err = network.set_weights(Matrix::zeros(2, 3), halves()).unwrap_err();

        assert!(matches!(err, NetworkError::DimensionMismatch { op: "set_weights", .. }));
        assert_eq!(network.input_weights(), &before);
    }

    #[test]
    fn test_forward_rejects_non_column_input() {
        let inputs = vec![col(1.0, 0.0)];
        let expected = vec![col(1.0, 0.0)];
        let network = Network::new(&inputs, &expected, ActivationFunction::Sigmoid).unwrap();

        let err = network.forward(&Matrix::zeros(2, 2)).unwrap_err();
        assert!(matches!(err, NetworkError::DimensionMismatch { op: "forward", .. }));
    }

    #[test]
    fn test_train_step_applies_hand_derived_update() {
        let inputs = vec![col(1.0, 0.0)];
        let expected = vec![col(1.0, 0.0)];
        let mut network = Network::new(&inputs, &expected, ActivationFunction::Sigmoid).unwrap();
        network.set_weights(halves(), halves()).unwrap();

        let loss = network.train_step().unwrap();

        // Every hidden and output unit sees the same pre-activation.
        let in_a = 0.5;
        let out_a = sigmoid(in_a);
        let in_b = out_a;
        let out_b = sigmoid(in_b);
        assert!((loss - ((out_b - 1.0).powi(2) + out_b.powi(2))).abs() < 1e-12);

        let delta_out_0 = 2.0 * (out_b - 1.0) * sigmoid_derivative(in_b) * out_a;
        let delta_out_1 = 2.0 * out_b * sigmoid_derivative(in_b) * out_a;
        let hidden = network.hidden_weights();
        assert!((hidden[(0, 0)] - (0.5 - 0.5 * delta_out_0)).abs() < 1e-12);
        assert!((hidden[(0, 1)] - (0.5 - 0.5 * delta_out_0)).abs() < 1e-12);
        assert!((hidden[(1, 0)] - (0.5 - 0.5 * delta_out_1)).abs() < 1e-12);
        assert!((hidden[(1, 1)] - (0.5 - 0.5 * delta_out_1)).abs() < 1e-12);

        // Input column 1 is multiplied by a zero input, so it stays put.
        let delta_in = (delta_out_0 + delta_out_1) * sigmoid_derivative(in_a);
        let input = network.input_weights();
        assert!((input[(0, 0)] - (0.5 - 0.5 * delta_in)).abs() < 1e-12);
        assert!((input[(1, 0)] - (0.5 - 0.5 * delta_in)).abs() < 1e-12);
        assert_eq!(input[(0, 1)], 0.5);
        assert_eq!(input[(1, 1)], 0.5);
    }

    #[test]
    fn test_learning_rate_scales_update() {
        let inputs = vec![col(1.0, 1.0)];
        let expected = vec![col(0.0, 1.0)];
        let config = NetworkConfig::new(ActivationFunction::Sigmoid).with_learning_rate(0.0);
        let mut network = Network::with_config(&inputs, &expected, config).unwrap();
        let before = (network.input_weights().clone(), network.hidden_weights().clone());

        network.train_step().unwrap();

        assert_eq!(network.input_weights(), &before.0);
        assert_eq!(network.hidden_weights(), &before.1);
    }

    #[test]
    fn test_sample_index_is_uniform() {
        let inputs = vec![col(0.0, 0.0), col(0.0, 1.0), col(1.0, 0.0), col(1.0, 1.0)];
        let expected = inputs.clone();
        let config = NetworkConfig::new(ActivationFunction::ReLU).with_seed(2024);
        let mut network = Network::with_config(&inputs, &expected, config).unwrap();

        let draws = 10_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[network.sample_index()] += 1;
        }

        for count in counts {
            let frequency = count as f64 / draws as f64;
            assert!((frequency - 0.25).abs() < 0.03, "frequency {frequency} too far from 0.25");
        }
    }
}
