use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;

pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// Construction-time settings for a `Network`.
///
/// - `activation`    — non-linearity used by both layers
/// - `learning_rate` — step size of every gradient-descent update
/// - `seed`          — seeds weight initialisation and sample selection;
///                     `None` draws the seed from OS entropy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub activation: ActivationFunction,
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(activation: ActivationFunction) -> Self {
        NetworkConfig {
            activation,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_builders() {
        let config = NetworkConfig::new(ActivationFunction::ReLU);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.seed, None);

        let config = config.with_learning_rate(0.1).with_seed(42);
        assert_eq!(config.activation, ActivationFunction::ReLU);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_seed_is_optional_in_json() {
        let config: NetworkConfig =
            serde_json::from_str(r#"{"activation":"Sigmoid","learning_rate":0.25}"#).unwrap();
        assert_eq!(config, NetworkConfig::new(ActivationFunction::Sigmoid).with_learning_rate(0.25));
    }
}
