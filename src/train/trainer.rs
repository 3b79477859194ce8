use tracing::info;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::checkpoint::Checkpoint;
use crate::train::train_config::TrainConfig;

/// Drives `network` through `config.steps` training steps, evaluating
/// accuracy every `config.eval_every` steps and once more at the end.
///
/// Returns the recorded checkpoints in step order. A run with zero steps
/// records nothing.
pub fn train_network(network: &mut Network<'_>, config: &TrainConfig) -> Result<Vec<Checkpoint>> {
    let mut checkpoints = Vec::new();
    let mut window_loss = 0.0;
    let mut window_steps = 0usize;

    for step in 1..=config.steps {
        window_loss += network.train_step()?;
        window_steps += 1;

        let periodic = config.eval_every > 0 && step % config.eval_every == 0;
        if periodic || step == config.steps {
            let checkpoint = Checkpoint {
                step,
                mean_loss: window_loss / window_steps as f64,
                accuracy: network.evaluate_accuracy()?,
            };
            info!(
                step = checkpoint.step,
                mean_loss = checkpoint.mean_loss,
                accuracy = checkpoint.accuracy,
                "checkpoint"
            );
            checkpoints.push(checkpoint);

            window_loss = 0.0;
            window_steps = 0;
        }
    }

    Ok(checkpoints)
}
