pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use loss::mse::{squared_error, sum_squared_error};
pub use network::network::Network;
pub use network::config::NetworkConfig;
pub use network::evaluation::{Evaluation, SamplePrediction};
pub use train::trainer::train_network;
pub use train::train_config::TrainConfig;
pub use train::checkpoint::Checkpoint;
