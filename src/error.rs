use thiserror::Error;

/// Errors produced by matrix operations and network construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// Two operands (or an operand and the fixed topology) disagree on shape.
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// Raw data could not form a rectangular matrix.
    #[error("invalid matrix shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
