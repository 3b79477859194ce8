use serde::{Serialize, Deserialize};

/// Scalar function paired with its derivative, both taking the
/// pre-activation value.
pub type ActivationPair = (fn(f64) -> f64, fn(f64) -> f64);

/// Non-linearity applied element-wise after each weighted sum. The same
/// variant is used for both layers of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(x),
            ActivationFunction::ReLU => relu(x),
        }
    }

    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid_derivative(x),
            ActivationFunction::ReLU => relu_derivative(x),
        }
    }

    /// Resolves the variant into plain function values so hot loops do not
    /// re-match on every call.
    pub fn pair(&self) -> ActivationPair {
        match self {
            ActivationFunction::Sigmoid => (sigmoid, sigmoid_derivative),
            ActivationFunction::ReLU => (relu, relu_derivative),
        }
    }
}

/// `1 / (1 + e^-x)`. Saturates to exactly 0 or 1 for large |x|.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

pub fn sigmoid_derivative(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}

pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Zero at the kink.
pub fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}
