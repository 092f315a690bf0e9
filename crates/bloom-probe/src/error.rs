//! Error types for the Bloom probe

use thiserror::Error;

/// Errors raised while constructing a Bloom filter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("slots_per_hash must be positive")]
    ZeroSlots,

    #[error("hash_count must be positive")]
    ZeroHashFunctions,

    #[error("Filter size overflows: {slots_per_hash} slots x {hash_count} hash functions")]
    FilterTooLarge {
        slots_per_hash: usize,
        hash_count: usize,
    },

    #[error("Too many hash functions: {count} > {max}")]
    TooManyHashFunctions { count: usize, max: u64 },
}

/// Errors raised by the false-positive evaluator
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Invalid evaluator configuration: {0}")]
    InvalidConfig(String),

    #[error("Key generator produced only {produced} unique keys of {requested} after {attempts} draws")]
    KeyGenerationExhausted {
        produced: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("Reporter error: {0}")]
    Report(String),
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::Report(err.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Report(err.to_string())
    }
}
