pub mod checkpoint;
pub mod train_config;
pub mod trainer;

pub use checkpoint::Checkpoint;
pub use train_config::TrainConfig;
pub use trainer::train_network;
