use serde::{Serialize, Deserialize};

/// Largest absolute error (exclusive) at which an output unit still counts
/// as correct.
pub const ACCURACY_TOLERANCE: f64 = 0.5;

/// Prediction for a single dataset sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePrediction {
    pub index: usize,
    pub predicted: [f64; 2],
    pub expected: [f64; 2],
    /// Both output units are within `ACCURACY_TOLERANCE` of the target.
    pub correct: bool,
}

impl SamplePrediction {
    pub fn new(index: usize, predicted: [f64; 2], expected: [f64; 2]) -> Self {
        let correct = predicted.iter()
            .zip(expected.iter())
            .all(|(p, e)| (p - e).abs() < ACCURACY_TOLERANCE);
        SamplePrediction { index, predicted, expected, correct }
    }
}

/// Result of running forward propagation over a whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub samples: Vec<SamplePrediction>,
    pub correct: usize,
    /// `correct / samples.len()`, in [0, 1].
    pub accuracy: f64,
}

impl Evaluation {
    pub fn from_samples(samples: Vec<SamplePrediction>) -> Self {
        let correct = samples.iter().filter(|s| s.correct).count();
        let accuracy = if samples.is_empty() {
            0.0
        } else {
            correct as f64 / samples.len() as f64
        };
        Evaluation { samples, correct, accuracy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_exclusive_per_unit() {
        assert!(SamplePrediction::new(0, [0.6, 0.1], [1.0, 0.0]).correct);
        assert!(!SamplePrediction::new(0, [0.5, 0.0], [1.0, 0.0]).correct);
        assert!(!SamplePrediction::new(0, [1.0, 0.9], [1.0, 0.0]).correct);
    }

    #[test]
    fn test_accuracy_fraction() {
        let evaluation = Evaluation::from_samples(vec![
            SamplePrediction::new(0, [1.0, 0.0], [1.0, 0.0]),
            SamplePrediction::new(1, [0.0, 0.0], [1.0, 1.0]),
        ]);
        assert_eq!(evaluation.correct, 1);
        assert_eq!(evaluation.accuracy, 0.5);
    }
}
