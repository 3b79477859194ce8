use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Shape every input and expected-output sample must have.
pub const SAMPLE_SHAPE: (usize, usize) = (2, 1);

/// Borrowed, validated view over aligned input / expected-output samples.
///
/// The view never mutates the samples and is cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'d> {
    inputs: &'d [Matrix],
    expected: &'d [Matrix],
}

impl<'d> Dataset<'d> {
    /// Fails with `InvalidDataset` when the collections differ in length,
    /// are empty, or hold a sample that is not a 2×1 column vector.
    pub fn new(inputs: &'d [Matrix], expected: &'d [Matrix]) -> Result<Self> {
        if inputs.len() != expected.len() {
            return Err(NetworkError::InvalidDataset(format!(
                "{} inputs but {} expected outputs",
                inputs.len(),
                expected.len()
            )));
        }
        if inputs.is_empty() {
            return Err(NetworkError::InvalidDataset("dataset is empty".into()));
        }

        for (i, (input, target)) in inputs.iter().zip(expected).enumerate() {
            if input.shape() != SAMPLE_SHAPE {
                return Err(NetworkError::InvalidDataset(format!(
                    "input {i} is {}x{}, expected 2x1",
                    input.rows(),
                    input.cols()
                )));
            }
            if target.shape() != SAMPLE_SHAPE {
                return Err(NetworkError::InvalidDataset(format!(
                    "expected output {i} is {}x{}, expected 2x1",
                    target.rows(),
                    target.cols()
                )));
            }
        }

        Ok(Dataset { inputs, expected })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always false for a constructed dataset; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&'d Matrix, &'d Matrix)> {
        let (inputs, expected) = (self.inputs, self.expected);
        Some((inputs.get(index)?, expected.get(index)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'d Matrix, &'d Matrix)> + 'd {
        let (inputs, expected) = (self.inputs, self.expected);
        inputs.iter().zip(expected.iter())
    }
}
