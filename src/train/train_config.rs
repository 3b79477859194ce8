use serde::{Serialize, Deserialize};

/// Configuration for a `train_network` run.
///
/// # Fields
/// - `steps`      — total number of stochastic training steps
/// - `eval_every` — record a `Checkpoint` after this many steps; `0` records
///                  only the final checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub steps: usize,
    pub eval_every: usize,
}

impl TrainConfig {
    pub fn new(steps: usize, eval_every: usize) -> Self {
        TrainConfig { steps, eval_every }
    }
}
