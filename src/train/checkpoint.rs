use serde::{Serialize, Deserialize};

/// Training statistics recorded by `train_network` at each evaluation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Number of training steps completed so far (1-based).
    pub step: usize,
    /// Mean step loss since the previous checkpoint.
    pub mean_loss: f64,
    /// Dataset accuracy in [0, 1] after `step` updates.
    pub accuracy: f64,
}
