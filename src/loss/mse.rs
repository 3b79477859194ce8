use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Squared error of a single output unit: `(output - expected)²`.
pub fn squared_error(output: f64, expected: f64) -> f64 {
    (output - expected).powi(2)
}

/// Sum of per-unit squared errors over two equally shaped matrices.
pub fn sum_squared_error(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
    if predicted.shape() != expected.shape() {
        return Err(NetworkError::DimensionMismatch {
            op: "sum_squared_error",
            left: predicted.shape(),
            right: expected.shape(),
        });
    }

    Ok(predicted.data().iter().flatten()
        .zip(expected.data().iter().flatten())
        .map(|(&a, &b)| squared_error(a, b))
        .sum())
}
