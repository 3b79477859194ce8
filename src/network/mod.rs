pub mod config;
pub mod dataset;
pub mod evaluation;
pub mod network;

pub use config::NetworkConfig;
pub use dataset::Dataset;
pub use evaluation::{Evaluation, SamplePrediction};
pub use network::Network;
