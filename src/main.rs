use std::env;
use std::error::Error;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;

use ferrite_backprop::{train_network, ActivationFunction, Matrix, Network, NetworkConfig, TrainConfig};

// Learns to swap the two components of a binary pair, printing one JSON
// checkpoint per line on stdout. Logs go to stderr (RUST_LOG, default info).
fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .event_format(format().with_target(false).without_time())
        .with_writer(std::io::stderr)
        .init();

    let inputs = vec![
        Matrix::column(&[0.0, 0.0]),
        Matrix::column(&[0.0, 1.0]),
        Matrix::column(&[1.0, 0.0]),
        Matrix::column(&[1.0, 1.0]),
    ];
    let expected_outputs = vec![
        Matrix::column(&[0.0, 0.0]),
        Matrix::column(&[1.0, 0.0]),
        Matrix::column(&[0.0, 1.0]),
        Matrix::column(&[1.0, 1.0]),
    ];

    for activation in [ActivationFunction::Sigmoid, ActivationFunction::ReLU] {
        let config = NetworkConfig::new(activation).with_seed(1);
        let mut network = Network::with_config(&inputs, &expected_outputs, config)?;

        for checkpoint in train_network(&mut network, &TrainConfig::new(10_000, 1_000))? {
            println!("{}", serde_json::to_string(&checkpoint)?);
        }

        let evaluation = network.evaluate()?;
        println!("{}", serde_json::to_string(&evaluation)?);
    }

    Ok(())
}
