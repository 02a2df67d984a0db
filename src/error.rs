use thiserror::Error;

/// Errors raised at the edges of the crate. The engines themselves are total and never fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("unknown sorting algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    #[error("input of length {len} exceeds the configured maximum of {max}")]
    InputTooLarge { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, TraceError>;
